//! Free-text input.

use lessonplayer_core::answer::{Answer, UserAnswer};
use lessonplayer_core::customization::CustomizationArgs;

use super::errors::{AnswerError, TextInputError};
use super::interaction_ids;
use super::text_field::TextField;
use super::widget::{AnswerWidget, ValidationTrigger, WidgetInput, WidgetNotification};

const DEFAULT_ROWS: i64 = 1;

/// Free-text answer field.
#[derive(Debug)]
pub struct TextInputWidget {
    field: TextField,
    placeholder: String,
    rows: i64,
}

impl TextInputWidget {
    /// Creates the widget from its customization args (`placeholder`, `rows`).
    #[must_use]
    pub fn new(args: &CustomizationArgs) -> Self {
        Self {
            field: TextField::new(false),
            placeholder: args.string("placeholder").unwrap_or_default(),
            rows: args.int("rows").unwrap_or(DEFAULT_ROWS),
        }
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Visible rows of the field.
    #[must_use]
    pub fn rows(&self) -> i64 {
        self.rows
    }

    /// Replaces the field's text.
    pub fn set_text(&mut self, text: &str) {
        self.field.edit(text, |_| None);
    }

    fn submit_time_error(&self) -> Option<AnswerError> {
        self.field
            .text()
            .trim()
            .is_empty()
            .then_some(TextInputError::EmptyInput.into())
    }
}

impl AnswerWidget for TextInputWidget {
    fn interaction_id(&self) -> &str {
        interaction_ids::TEXT_INPUT
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        let text = self.field.text();
        if text.trim().is_empty() {
            return None;
        }
        Some(UserAnswer::plain(Answer::Text(text.to_owned()), text))
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::RealTime => None,
            ValidationTrigger::SubmitTime => self.submit_time_error(),
        };
        self.field.record_error(trigger, error)
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

    fn pending_notifications(&self) -> &[WidgetNotification] {
        self.field.notifications()
    }

    fn clear_notifications(&mut self) {
        self.field.clear_notifications();
    }
}
