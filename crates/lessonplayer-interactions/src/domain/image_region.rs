//! Click-on-image input.

use lessonplayer_core::answer::{Answer, ClickOnImage, UserAnswer};
use lessonplayer_core::customization::{CustomizationArgs, ImageWithRegions};

use super::errors::{AnswerError, ImageRegionError};
use super::interaction_ids;
use super::widget::{AnswerWidget, ErrorSlot, ValidationTrigger, WidgetInput, WidgetNotification};

/// An image with labeled regions; the learner answers by clicking it.
#[derive(Debug)]
pub struct ImageRegionWidget {
    image: ImageWithRegions,
    last_click: Option<ClickOnImage>,
    errors: ErrorSlot,
}

impl ImageRegionWidget {
    /// Creates the widget from `imageAndRegions`.
    #[must_use]
    pub fn new(args: &CustomizationArgs) -> Self {
        Self {
            image: args.image_with_regions("imageAndRegions"),
            last_click: None,
            errors: ErrorSlot::default(),
        }
    }

    /// The image and its regions.
    #[must_use]
    pub fn image(&self) -> &ImageWithRegions {
        &self.image
    }

    /// Records a click at normalized coordinates. The click belongs to the
    /// first region containing the point; outside every region it is a
    /// default-region click with no labels.
    pub fn click(&mut self, x: f64, y: f64) -> &ClickOnImage {
        let labels = self
            .image
            .labeled_regions
            .iter()
            .find(|region| region.region.contains(x, y))
            .map(|region| vec![region.label.clone()])
            .unwrap_or_default();
        self.validate(ValidationTrigger::RealTime);
        self.last_click.insert(ClickOnImage { x, y, labels })
    }
}

impl AnswerWidget for ImageRegionWidget {
    fn interaction_id(&self) -> &str {
        interaction_ids::IMAGE_CLICK_INPUT
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        let click = self.last_click.clone()?;
        let text = click.labels.first().cloned().unwrap_or_default();
        Some(UserAnswer::plain(Answer::ImageClick(click), text))
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::SubmitTime if self.last_click.is_none() => {
                Some(ImageRegionError::EmptyInput.into())
            }
            _ => None,
        };
        self.errors.record(error)
    }

    fn current_error(&self) -> Option<&AnswerError> {
        self.errors.current()
    }

    fn is_answer_available(&self) -> bool {
        true
    }

    fn handle_input(&mut self, input: WidgetInput) -> bool {
        match input {
            WidgetInput::ImageClicked { x, y } => {
                self.click(x, y);
                true
            }
            _ => false,
        }
    }

    fn pending_notifications(&self) -> &[WidgetNotification] {
        self.errors.notifications()
    }

    fn clear_notifications(&mut self) {
        self.errors.clear_notifications();
    }
}
