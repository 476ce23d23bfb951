//! Ratio input, e.g. `1:2:3`.

use lessonplayer_core::answer::{Answer, UserAnswer};
use lessonplayer_core::customization::CustomizationArgs;

use super::errors::{AnswerError, RatioInputError};
use super::interaction_ids;
use super::text_field::TextField;
use super::widget::{AnswerWidget, ValidationTrigger, WidgetInput, WidgetNotification};
use crate::parsing::ratio;

/// Text field accepting a colon-separated ratio.
#[derive(Debug)]
pub struct RatioInputWidget {
    field: TextField,
    placeholder: String,
    number_of_terms: usize,
}

impl RatioInputWidget {
    /// Creates the widget from `placeholder` and `numberOfTerms`. A missing,
    /// negative or zero `numberOfTerms` accepts any number of terms.
    #[must_use]
    pub fn new(args: &CustomizationArgs) -> Self {
        Self {
            field: TextField::new(false),
            placeholder: args.string("placeholder").unwrap_or_default(),
            number_of_terms: args
                .int("numberOfTerms")
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(0),
        }
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Required number of terms, zero when unconstrained.
    #[must_use]
    pub fn number_of_terms(&self) -> usize {
        self.number_of_terms
    }

    /// Replaces the field's text and runs the real-time check.
    pub fn set_text(&mut self, text: &str) {
        self.field
            .edit(text, |t| ratio::real_time_error(t).map(AnswerError::from));
    }

    fn submit_time_error(&self) -> Option<RatioInputError> {
        let text = self.field.text();
        if text.trim().is_empty() {
            return Some(RatioInputError::EmptyInput);
        }
        ratio::submit_time_error(text, self.number_of_terms)
    }
}

impl AnswerWidget for RatioInputWidget {
    fn interaction_id(&self) -> &str {
        interaction_ids::RATIO_EXPRESSION_INPUT
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        let terms = ratio::parse(self.field.text())?;
        let mut answer = UserAnswer::plain(
            Answer::Ratio(terms.clone()),
            ratio::to_answer_string(&terms),
        );
        answer.content_description = Some(ratio::to_accessible_string(&terms));
        Some(answer)
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::RealTime => ratio::real_time_error(self.field.text()),
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

    fn pending_notifications(&self) -> &[WidgetNotification] {
        self.field.notifications()
    }

    fn clear_notifications(&mut self) {
        self.field.clear_notifications();
    }
}

#[cfg(test)]
mod tests {
    use lessonplayer_core::answer::AnswerDisplay;

    use super::*;

    fn widget(number_of_terms: i64) -> RatioInputWidget {
        RatioInputWidget::new(&CustomizationArgs::new().with("numberOfTerms", number_of_terms))
    }

    #[test]
    fn test_answer_renders_colon_and_accessible_forms() {
        // Arrange
        let mut widget = widget(3);
        widget.set_text("1 : 2 : 3");

        // Act
        let error = widget.validate(ValidationTrigger::SubmitTime);
        let answer = widget.current_answer().unwrap();

        // Assert
        assert!(error.is_none());
        assert_eq!(answer.answer, Answer::Ratio(vec![1, 2, 3]));
        assert_eq!(answer.display, AnswerDisplay::Plain("1:2:3".into()));
        assert_eq!(answer.content_description.as_deref(), Some("1 to 2 to 3"));
    }

    #[test]
    fn test_wrong_term_count_is_invalid_size() {
        let mut widget = widget(3);
        widget.set_text("1:2");

        assert_eq!(
            widget.validate(ValidationTrigger::SubmitTime),
            Some(RatioInputError::InvalidSize { expected: 3 }.into())
        );
    }

    #[test]
    fn test_negative_term_count_means_unconstrained() {
        assert_eq!(widget(-2).number_of_terms(), 0);
    }

    #[test]
    fn test_double_colon_is_flagged_while_typing() {
        let mut widget = widget(0);

        widget.handle_input(WidgetInput::TextChanged("1::".into()));

        assert_eq!(
            widget.current_error(),
            Some(&RatioInputError::InvalidColons.into())
        );
    }

    #[test]
    fn test_blank_submission_is_empty_input() {
        let mut widget = widget(0);
        widget.set_text("  ");

        assert_eq!(
            widget.validate(ValidationTrigger::SubmitTime),
            Some(RatioInputError::EmptyInput.into())
        );
    }
}
