//! Real-number input.

use lessonplayer_core::answer::{Answer, UserAnswer};
use lessonplayer_core::draft::WidgetDraft;
use tracing::debug;

use super::errors::{AnswerError, NumericInputError};
use super::interaction_ids;
use super::text_field::TextField;
use super::widget::{AnswerWidget, ValidationTrigger, WidgetInput, WidgetNotification};
use crate::parsing::number;

/// Text field accepting a real number.
#[derive(Debug)]
pub struct NumericInputWidget {
    field: TextField,
}

impl NumericInputWidget {
    /// Creates the widget, restoring `draft` when it was taken from a
    /// numeric input.
    #[must_use]
    pub fn new(draft: Option<&WidgetDraft>) -> Self {
        let mut widget = Self {
            field: TextField::new(false),
        };
        if let Some(draft) = draft.filter(|d| d.interaction_id == interaction_ids::NUMERIC_INPUT) {
            debug!(raw_text = %draft.raw_text, "restoring numeric draft");
            widget.set_text(&draft.raw_text);
            if let Some(category) = draft.last_error_category {
                widget.validate(category.into());
            }
            widget.clear_notifications();
        }
        widget
    }

    /// Replaces the field's text and runs the real-time check.
    pub fn set_text(&mut self, text: &str) {
        self.field
            .edit(text, |t| number::real_time_error(t).map(AnswerError::from));
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.field.text()
    }

    fn submit_time_error(&self) -> Option<NumericInputError> {
        let text = self.field.text();
        if text.is_empty() {
            return Some(NumericInputError::EmptyInput);
        }
        number::submit_time_error(text)
    }
}

impl AnswerWidget for NumericInputWidget {
    fn interaction_id(&self) -> &str {
        interaction_ids::NUMERIC_INPUT
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        let text = self.field.text();
        let value = number::parse(text)?;
        Some(UserAnswer::plain(Answer::Number(value), text))
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::RealTime => number::real_time_error(self.field.text()),
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
            interaction_id: interaction_ids::NUMERIC_INPUT.to_owned(),
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
