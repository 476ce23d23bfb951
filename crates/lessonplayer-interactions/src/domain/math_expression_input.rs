//! Numeric expression, algebraic expression and equation input.

use std::sync::Arc;

use lessonplayer_core::answer::{Answer, MathExpressionAnswer, UserAnswer};
use lessonplayer_core::customization::CustomizationArgs;
use lessonplayer_core::math::{MathExpressionMode, MathExpressionParser, ParsedMath};

use super::errors::{AnswerError, MathInputError};
use super::interaction_ids;
use super::text_field::TextField;
use super::widget::{AnswerWidget, ValidationTrigger, WidgetInput, WidgetNotification};

fn default_hint(mode: MathExpressionMode) -> &'static str {
    match mode {
        MathExpressionMode::NumericExpression => "Type an expression here, using only numbers.",
        MathExpressionMode::AlgebraicExpression => "Type an expression here.",
        MathExpressionMode::MathEquation => "Type an equation here.",
    }
}

/// Interaction id for each mode.
#[must_use]
pub fn interaction_id_for(mode: MathExpressionMode) -> &'static str {
    match mode {
        MathExpressionMode::NumericExpression => interaction_ids::NUMERIC_EXPRESSION_INPUT,
        MathExpressionMode::AlgebraicExpression => interaction_ids::ALGEBRAIC_EXPRESSION_INPUT,
        MathExpressionMode::MathEquation => interaction_ids::MATH_EQUATION_INPUT,
    }
}

/// Text field whose content is parsed as math.
///
/// There are no real-time errors: partial expressions are almost always
/// malformed while being typed. Blank input stays submittable so the learner
/// gets the empty-input message.
#[derive(Debug)]
pub struct MathExpressionInputWidget {
    field: TextField,
    mode: MathExpressionMode,
    hint: String,
    allowed_variables: Vec<String>,
    use_fraction_for_division: bool,
    parser: Arc<dyn MathExpressionParser>,
}

impl MathExpressionInputWidget {
    /// Creates the widget. Reads `placeholder` (numeric mode only),
    /// `customOskLetters` (algebraic modes only) and `useFractionForDivision`.
    #[must_use]
    pub fn new(
        mode: MathExpressionMode,
        args: &CustomizationArgs,
        parser: Arc<dyn MathExpressionParser>,
    ) -> Self {
        let hint = match mode {
            MathExpressionMode::NumericExpression => args
                .string("placeholder")
                .filter(|placeholder| !placeholder.is_empty()),
            _ => None,
        }
        .unwrap_or_else(|| default_hint(mode).to_owned());
        let allowed_variables = if mode.allows_variables() {
            args.string_list("customOskLetters")
        } else {
            Vec::new()
        };
        Self {
            field: TextField::new(true),
            mode,
            hint,
            allowed_variables,
            use_fraction_for_division: args.bool_or("useFractionForDivision", false),
            parser,
        }
    }

    /// The widget's mode.
    #[must_use]
    pub fn mode(&self) -> MathExpressionMode {
        self.mode
    }

    /// Hint shown while the field is empty.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Variables the learner may use; empty means unrestricted.
    #[must_use]
    pub fn allowed_variables(&self) -> &[String] {
        &self.allowed_variables
    }

    /// Replaces the field's text.
    pub fn set_text(&mut self, text: &str) {
        self.field.edit(text, |_| None);
    }

    fn parse(&self) -> Result<Box<dyn ParsedMath>, MathInputError> {
        self.parser
            .parse(self.field.text(), self.mode, &self.allowed_variables)
            .map_err(MathInputError::from)
    }

    fn submit_time_error(&self) -> Option<MathInputError> {
        if self.field.text().trim().is_empty() {
            return Some(MathInputError::EmptyInput { mode: self.mode });
        }
        self.parse().err()
    }
}

impl AnswerWidget for MathExpressionInputWidget {
    fn interaction_id(&self) -> &str {
        interaction_id_for(self.mode)
    }

    fn current_answer(&self) -> Option<UserAnswer> {
        let raw_text = self.field.text();
        if raw_text.trim().is_empty() {
            return None;
        }
        let parsed = self.parse().ok();
        let latex = parsed
            .as_ref()
            .map(|p| p.to_latex(self.use_fraction_for_division));
        let description = parsed
            .as_ref()
            .and_then(|p| p.to_human_readable())
            .unwrap_or_else(|| raw_text.to_owned());

        let mut answer = UserAnswer::plain(
            Answer::MathExpression(MathExpressionAnswer {
                raw_text: raw_text.to_owned(),
                latex,
                description: Some(description.clone()),
            }),
            raw_text,
        );
        answer.content_description = Some(description);
        Some(answer)
    }

    fn validate(&mut self, trigger: ValidationTrigger) -> Option<AnswerError> {
        let error = match trigger {
            ValidationTrigger::RealTime => None,
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
    use lessonplayer_core::math::{BinaryOperator, MathParsingError};
    use lessonplayer_test_support::FakeMathParser;

    use super::*;
    use crate::parsing::math::DefaultMathExpressionParser;

    fn algebraic_with(parser: Arc<dyn MathExpressionParser>) -> MathExpressionInputWidget {
        let args = CustomizationArgs::new().with("customOskLetters", vec!["x", "y"]);
        MathExpressionInputWidget::new(MathExpressionMode::AlgebraicExpression, &args, parser)
    }

    #[test]
    fn test_blank_submission_uses_mode_specific_message() {
        // Arrange
        let mut widget = MathExpressionInputWidget::new(
            MathExpressionMode::MathEquation,
            &CustomizationArgs::new(),
            Arc::new(DefaultMathExpressionParser),
        );

        // Act
        let error = widget.validate(ValidationTrigger::SubmitTime).unwrap();

        // Assert
        assert_eq!(error.to_string(), "Enter an equation to continue.");
        assert!(widget.is_answer_available());
        assert!(widget.current_answer().is_none());
    }

    #[test]
    fn test_hint_comes_from_placeholder_only_in_numeric_mode() {
        let args = CustomizationArgs::new().with("placeholder", "Write it here");
        let parser: Arc<dyn MathExpressionParser> = Arc::new(DefaultMathExpressionParser);

        let numeric = MathExpressionInputWidget::new(
            MathExpressionMode::NumericExpression,
            &args,
            Arc::clone(&parser),
        );
        let algebraic =
            MathExpressionInputWidget::new(MathExpressionMode::AlgebraicExpression, &args, parser);

        assert_eq!(numeric.hint(), "Write it here");
        assert_eq!(algebraic.hint(), "Type an expression here.");
    }

    #[test]
    fn test_parser_receives_mode_and_allowed_variables() {
        // Arrange
        let parser = Arc::new(FakeMathParser::succeeding("x^{2}", Some("x squared")));
        let mut widget = algebraic_with(parser.clone());
        widget.set_text("x^2");

        // Act
        let error = widget.validate(ValidationTrigger::SubmitTime);

        // Assert
        assert!(error.is_none());
        assert_eq!(
            parser.calls(),
            vec![(
                "x^2".to_owned(),
                MathExpressionMode::AlgebraicExpression,
                vec!["x".to_owned(), "y".to_owned()]
            )]
        );
    }

    #[test]
    fn test_parse_failure_maps_to_input_error() {
        // Arrange
        let parser = Arc::new(FakeMathParser::failing(
            MathParsingError::NoVariableOrNumberAfterBinaryOperator {
                operator: BinaryOperator::Add,
                symbol: "+".into(),
            },
        ));
        let mut widget = algebraic_with(parser);
        widget.set_text("x +");

        // Act
        let error = widget.validate(ValidationTrigger::SubmitTime).unwrap();

        // Assert
        assert_eq!(error.category(), "no_variable_or_number_after_binary_operator");
        assert_eq!(widget.current_error(), Some(&error));
    }

    #[test]
    fn test_answer_carries_latex_and_description() {
        // Arrange
        let args = CustomizationArgs::new().with("useFractionForDivision", true);
        let mut widget = MathExpressionInputWidget::new(
            MathExpressionMode::NumericExpression,
            &args,
            Arc::new(DefaultMathExpressionParser),
        );
        widget.set_text("1/2");

        // Act
        let answer = widget.current_answer().unwrap();

        // Assert
        assert_eq!(
            answer.answer,
            Answer::MathExpression(MathExpressionAnswer {
                raw_text: "1/2".into(),
                latex: Some("\\frac{1}{2}".into()),
                description: Some("1 divided by 2".into()),
            })
        );
        assert_eq!(answer.content_description.as_deref(), Some("1 divided by 2"));
    }

    #[test]
    fn test_interaction_id_follows_mode() {
        let widget = MathExpressionInputWidget::new(
            MathExpressionMode::NumericExpression,
            &CustomizationArgs::new(),
            Arc::new(DefaultMathExpressionParser),
        );
        assert_eq!(widget.interaction_id(), interaction_ids::NUMERIC_EXPRESSION_INPUT);
        assert_eq!(widget.mode(), MathExpressionMode::NumericExpression);
        assert!(widget.allowed_variables().is_empty());
    }
}
