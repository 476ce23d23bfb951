//! Fraction and mixed-number input.

use lessonplayer_core::answer::{Answer, UserAnswer};
use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::draft::WidgetDraft;
use tracing::debug;

use super::errors::{AnswerError, FractionInputError};
use super::interaction_ids;
use super::text_field::TextField;
use super::widget::{AnswerWidget, ValidationTrigger, WidgetInput, WidgetNotification};
use crate::parsing::fraction;

/// Text field accepting a fraction such as `3/4` or `-1 2/3`.
#[derive(Debug)]
pub struct FractionInputWidget {
    field: TextField,
    placeholder: String,
}

impl FractionInputWidget {
    /// Creates the widget, restoring `draft` when it was taken from a
    /// fraction input. A draft that was showing an error is re-validated at
    /// the tier that raised it, so the same error reappears.
    #[must_use]
    pub fn new(args: &CustomizationArgs, draft: Option<&WidgetDraft>) -> Self {
        let mut widget = Self {
            field: TextField::new(false),
            placeholder: args.string("customPlaceholder").unwrap_or_default(),
        };
        if let Some(draft) = draft.filter(|d| d.interaction_id == interaction_ids::FRACTION_INPUT) {
            debug!(raw_text = %draft.raw_text, "restoring fraction draft");
            widget.set_text(&draft.raw_text);
            if let Some(category) = draft.last_error_category {
                widget.validate(category.into());
            }
            widget.clear_notifications();
        }
        widget
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replaces the field's text and runs the real-time check.
    pub fn set_text(&mut self, text: &str) {
        self.field
            .edit(text, |t| fraction::real_time_error(t).map(AnswerError::from));
    }

    fn submit_time_error(&self) -> Option<FractionInputError> {
        let text = self.field.text();
        if text.trim().is_empty() {
            return Some(FractionInputError::EmptyInput);
        }
        fraction::submit_time_error(text)
    }
}

impl AnswerWidget for FractionInputWidget {
    fn interaction_id(&self) -> &str {
        interaction_ids::FRACTION_INPUT
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        let parsed = fraction::parse(self.field.text())?;
        Some(UserAnswer::plain(Answer::Fraction(parsed), parsed.to_string()))
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::RealTime => fraction::real_time_error(self.field.text()),
            ValidationTrigger::SubmitTime => self.submit_time_error(),
        };
        self.field.record_error(trigger, error.map(AnswerError::from))
    }

    fn current_error(&self) -> Option<&AnswerError> {
        self.field.state().current_error.as_ref()
    }

    fn is_answer_available(&self) -> bool {
        self.field.state().is_answer_available
    }

    fn handle_input(&mut self, input: WidgetInput) -> bool {
        match input {
            WidgetInput::TextChanged(text) => {
                self.set_text(&text);
                true
            }
            _ => false,
        }
    }

    fn serialize_draft(&self) -> Option<WidgetDraft> {
        Some(WidgetDraft {
            interaction_id: interaction_ids::FRACTION_INPUT.to_owned(),
            raw_text: self.field.text().to_owned(),
            last_error_category: self.field.error_trigger().map(Into::into),
        })
    }

    fn pending_notifications(&self) -> &[WidgetNotification] {
        self.field.notifications()
    }

    fn clear_notifications(&mut self) {
        self.field.clear_notifications();
    }
}
