//! Learner-facing answer error kinds.
//!
//! Every widget has a closed set of named errors. Their `Display` output is
//! the message shown to the learner; `category()` is a stable identifier used
//! in drafts and logs.

use lessonplayer_core::math::{MathExpressionMode, MathParsingError};
use thiserror::Error;

/// Fraction input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionInputError {
    /// Characters other than digits, spaces, `/` and `-`.
    #[error("Please only use numerical digits, spaces or forward slashes (/)")]
    InvalidChars,
    /// Not shaped like a fraction or mixed number.
    #[error("Please enter a valid fraction (e.g., 5/3 or 1 2/3)")]
    InvalidFormat,
    /// Zero denominator.
    #[error("Please do not put 0 in the denominator")]
    DivisionByZero,
    /// A part has more than seven digits.
    #[error("None of the numbers in the fraction should have more than 7 digits.")]
    NumberTooLong,
    /// Nothing was entered.
    #[error("Enter a fraction to continue.")]
    EmptyInput,
}

impl FractionInputError {
    /// Stable error category.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidChars => "invalid_chars",
            Self::InvalidFormat => "invalid_format",
            Self::DivisionByZero => "division_by_zero",
            Self::NumberTooLong => "number_too_long",
            Self::EmptyInput => "empty_input",
        }
    }
}

/// Numeric input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericInputError {
    /// Not shaped like a number.
    #[error("Please enter a valid number.")]
    InvalidFormat,
    /// Starts with a decimal point, e.g. `.5`.
    #[error("Please begin your answer with a number (e.g.,\u{201d}0\u{201d} in 0.5).")]
    StartingWithFloatingPoint,
    /// Longer than fifteen characters.
    #[error("Answer can contain at most 15 digits (0\u{2013}9) or symbols (. or -).")]
    NumberTooLong,
    /// Nothing was entered.
    #[error("Enter a number to continue.")]
    EmptyInput,
}

impl NumericInputError {
    /// Stable error category.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::StartingWithFloatingPoint => "starting_with_floating_point",
            Self::NumberTooLong => "number_too_long",
            Self::EmptyInput => "empty_input",
        }
    }
}

/// Ratio input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioInputError {
    /// Characters other than digits, spaces and colons.
    #[error("Please write a ratio that consists of digits separated by colons (e.g. 1:2 or 1:2:3).")]
    InvalidChars,
    /// Two colons next to each other.
    #[error("Your answer has two colons (:) next to each other.")]
    InvalidColons,
    /// Not shaped like a ratio.
    #[error("Please enter a valid ratio (e.g. 1:2 or 1:2:3).")]
    InvalidFormat,
    /// A term is zero.
    #[error("Ratios cannot have 0 as an element.")]
    IncludesZero,
    /// Wrong number of terms.
    #[error("Number of terms is not equal to the required terms ({expected}).")]
    InvalidSize {
        /// The required number of terms.
        expected: usize,
    },
    /// Nothing was entered.
    #[error("Enter a ratio to continue.")]
    EmptyInput,
}

impl RatioInputError {
    /// Stable error category.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidChars => "invalid_chars",
            Self::InvalidColons => "invalid_colons",
            Self::InvalidFormat => "invalid_format",
            Self::IncludesZero => "includes_zero",
            Self::InvalidSize { .. } => "invalid_size",
            Self::EmptyInput => "empty_input",
        }
    }
}

/// Free-text input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextInputError {
    /// Nothing but whitespace was entered.
    #[error("Enter an answer to continue.")]
    EmptyInput,
}

/// Selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Nothing is selected.
    #[error("Select an answer to continue.")]
    EmptyInput,
    /// Fewer items selected than required.
    #[error("Please select at least {min} choices.")]
    BelowMinimum {
        /// The minimum selection count.
        min: usize,
    },
}

/// Drag-and-drop sort errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragDropSortError {
    /// The items are still in their initial arrangement.
    #[error("Rearrange the items to continue.")]
    EmptyInput,
}

/// Image region errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRegionError {
    /// No part of the image was clicked.
    #[error("Select a part of the image to continue.")]
    EmptyInput,
}

fn empty_math_input_message(mode: &MathExpressionMode) -> &'static str {
    match mode {
        MathExpressionMode::NumericExpression | MathExpressionMode::AlgebraicExpression => {
            "Enter an expression to continue."
        }
        MathExpressionMode::MathEquation => "Enter an equation to continue.",
    }
}

/// Math expression input errors, one per parse failure plus blank input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathInputError {
    /// Nothing was entered.
    #[error("{}", empty_math_input_message(.mode))]
    EmptyInput {
        /// The widget's mode.
        mode: MathExpressionMode,
    },
    /// Variables outside the allowed set.
    #[error("Please use the variables specified in the question and not {}.", .variables.join(", "))]
    DisabledVariablesInUse {
        /// The offending variables.
        variables: Vec<String>,
    },
    /// More than one `=`.
    #[error("Your equation contains too many =s.")]
    EquationHasTooManyEquals,
    /// No `=`.
    #[error("Your equation is missing an '=' sign.")]
    EquationIsMissingEquals,
    /// One side of `=` is empty.
    #[error("One of the sides of '=' in your equation is empty.")]
    EquationMissingLhsOrRhs,
    /// A variable in an exponent.
    #[error("Sorry, variables in exponents are not supported by the app. Please revise your answer.")]
    ExponentIsVariableExpression,
    /// An exponent above the supported maximum.
    #[error("Sorry, powers higher than 5 are not supported by the app. Please revise your answer.")]
    ExponentTooLarge,
    /// A truncated function name.
    #[error("Please make sure your function names are complete, e.g. sqrt.")]
    FunctionNameIncomplete,
    /// Unclassified parse failure.
    #[error("Sorry, we could not understand your answer. Please check it to make sure there are no errors.")]
    Generic,
    /// A square root with no operand.
    #[error("Missing input for square root.")]
    HangingSquareRoot,
    /// An unsupported function.
    #[error("The function {name} is not supported. Please revise your answer.")]
    InvalidFunctionInUse {
        /// The function name.
        name: String,
    },
    /// Doubled parentheses.
    #[error("Your answer has multiple brackets around {raw}. Please remove the extra brackets.")]
    MultipleRedundantParentheses {
        /// The wrapped text.
        raw: String,
    },
    /// An exponent inside an exponent.
    #[error("Your expression contains an exponent in an exponent which is not supported.")]
    NestedExponents,
    /// Nothing after a binary operator.
    #[error("There seems to be a variable or number missing after the {symbol} operator.")]
    NoVariableOrNumberAfterBinaryOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// Nothing before a binary operator.
    #[error("There seems to be a variable or number missing before the {symbol} operator.")]
    NoVariableOrNumberBeforeBinaryOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// A number after a variable.
    #[error("Please put the number before the variable, e.g. {number}{variable}.")]
    NumberAfterVariable {
        /// The number.
        number: String,
        /// The variable.
        variable: String,
    },
    /// Parentheses around a single term.
    #[error("Your answer includes redundant brackets around {raw}. Please remove them.")]
    RedundantParenthesesForIndividualTerms {
        /// The wrapped text.
        raw: String,
    },
    /// Parentheses around the whole expression.
    #[error("Your answer includes redundant brackets around the whole expression {raw}.")]
    SingleRedundantParentheses {
        /// The wrapped text.
        raw: String,
    },
    /// Numbers separated by whitespace.
    #[error("Your answer has spaces between numbers. Please remove them.")]
    SpacesBetweenNumbers,
    /// Two binary operators in a row.
    #[error("The operators {first} and {second} should be separated by a variable or number.")]
    SubsequentBinaryOperators {
        /// The first operator.
        first: String,
        /// The second operator.
        second: String,
    },
    /// Two unary operators in a row.
    #[error("Your answer has two symbols next to each other.")]
    SubsequentUnaryOperators,
    /// Division by zero.
    #[error("Dividing by zero is invalid. Please revise your answer.")]
    TermDividedByZero,
    /// Mismatched parentheses.
    #[error("Your answer has an unbalanced number of parentheses.")]
    UnbalancedParentheses,
    /// A meaningless symbol.
    #[error("The {symbol} symbol is not allowed in your answer.")]
    UnnecessarySymbols {
        /// The symbol.
        symbol: String,
    },
    /// A variable in a numeric expression.
    #[error("Please do not use variables in your answer.")]
    VariableInNumericExpression,
}

impl From<MathParsingError> for MathInputError {
    fn from(error: MathParsingError) -> Self {
        match error {
            MathParsingError::DisabledVariablesInUse { variables } => {
                Self::DisabledVariablesInUse { variables }
            }
            MathParsingError::EquationHasTooManyEquals => Self::EquationHasTooManyEquals,
            MathParsingError::EquationIsMissingEquals => Self::EquationIsMissingEquals,
            MathParsingError::EquationMissingLhsOrRhs => Self::EquationMissingLhsOrRhs,
            MathParsingError::ExponentIsVariableExpression => Self::ExponentIsVariableExpression,
            MathParsingError::ExponentTooLarge => Self::ExponentTooLarge,
            MathParsingError::FunctionNameIncomplete => Self::FunctionNameIncomplete,
            MathParsingError::Generic => Self::Generic,
            MathParsingError::HangingSquareRoot => Self::HangingSquareRoot,
            MathParsingError::InvalidFunctionInUse { name } => Self::InvalidFunctionInUse { name },
            MathParsingError::MultipleRedundantParentheses { raw } => {
                Self::MultipleRedundantParentheses { raw }
            }
            MathParsingError::NestedExponents => Self::NestedExponents,
            MathParsingError::NoVariableOrNumberAfterBinaryOperator { symbol, .. } => {
                Self::NoVariableOrNumberAfterBinaryOperator { symbol }
            }
            MathParsingError::NoVariableOrNumberBeforeBinaryOperator { symbol, .. } => {
                Self::NoVariableOrNumberBeforeBinaryOperator { symbol }
            }
            MathParsingError::NumberAfterVariable { number, variable } => {
                Self::NumberAfterVariable { number, variable }
            }
            MathParsingError::RedundantParenthesesForIndividualTerms { raw } => {
                Self::RedundantParenthesesForIndividualTerms { raw }
            }
            MathParsingError::SingleRedundantParentheses { raw } => {
                Self::SingleRedundantParentheses { raw }
            }
            MathParsingError::SpacesBetweenNumbers => Self::SpacesBetweenNumbers,
            MathParsingError::SubsequentBinaryOperators { first, second } => {
                Self::SubsequentBinaryOperators { first, second }
            }
            MathParsingError::SubsequentUnaryOperators => Self::SubsequentUnaryOperators,
            MathParsingError::TermDividedByZero => Self::TermDividedByZero,
            MathParsingError::UnbalancedParentheses => Self::UnbalancedParentheses,
            MathParsingError::UnnecessarySymbols { symbol } => Self::UnnecessarySymbols { symbol },
            MathParsingError::VariableInNumericExpression => Self::VariableInNumericExpression,
        }
    }
}

impl MathInputError {
    /// Stable error category.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => "empty_input",
            Self::DisabledVariablesInUse { .. } => "disabled_variables_in_use",
            Self::EquationHasTooManyEquals => "equation_has_too_many_equals",
            Self::EquationIsMissingEquals => "equation_is_missing_equals",
            Self::EquationMissingLhsOrRhs => "equation_missing_lhs_or_rhs",
            Self::ExponentIsVariableExpression => "exponent_is_variable_expression",
            Self::ExponentTooLarge => "exponent_too_large",
            Self::FunctionNameIncomplete => "function_name_incomplete",
            Self::Generic => "generic",
            Self::HangingSquareRoot => "hanging_square_root",
            Self::InvalidFunctionInUse { .. } => "invalid_function_in_use",
            Self::MultipleRedundantParentheses { .. } => "multiple_redundant_parentheses",
            Self::NestedExponents => "nested_exponents",
            Self::NoVariableOrNumberAfterBinaryOperator { .. } => {
                "no_variable_or_number_after_binary_operator"
            }
            Self::NoVariableOrNumberBeforeBinaryOperator { .. } => {
                "no_variable_or_number_before_binary_operator"
            }
            Self::NumberAfterVariable { .. } => "number_after_variable",
            Self::RedundantParenthesesForIndividualTerms { .. } => {
                "redundant_parentheses_for_individual_terms"
            }
            Self::SingleRedundantParentheses { .. } => "single_redundant_parentheses",
            Self::SpacesBetweenNumbers => "spaces_between_numbers",
            Self::SubsequentBinaryOperators { .. } => "subsequent_binary_operators",
            Self::SubsequentUnaryOperators => "subsequent_unary_operators",
            Self::TermDividedByZero => "term_divided_by_zero",
            Self::UnbalancedParentheses => "unbalanced_parentheses",
            Self::UnnecessarySymbols { .. } => "unnecessary_symbols",
            Self::VariableInNumericExpression => "variable_in_numeric_expression",
        }
    }
}

/// Any error an answer widget can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// Fraction input error.
    #[error(transparent)]
    Fraction(#[from] FractionInputError),
    /// Numeric input error.
    #[error(transparent)]
    Numeric(#[from] NumericInputError),
    /// Ratio input error.
    #[error(transparent)]
    Ratio(#[from] RatioInputError),
    /// Math expression input error.
    #[error(transparent)]
    MathExpression(#[from] MathInputError),
    /// Free-text input error.
    #[error(transparent)]
    Text(#[from] TextInputError),
    /// Selection error.
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Drag-and-drop sort error.
    #[error(transparent)]
    DragDropSort(#[from] DragDropSortError),
    /// Image region error.
    #[error(transparent)]
    ImageRegion(#[from] ImageRegionError),
}

impl AnswerError {
    /// Stable error category, shared across widgets for the same kind of
    /// problem (e.g. every blank submission is `"empty_input"`).
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Fraction(e) => e.category(),
            Self::Numeric(e) => e.category(),
            Self::Ratio(e) => e.category(),
            Self::MathExpression(e) => e.category(),
            Self::Text(TextInputError::EmptyInput)
            | Self::Selection(SelectionError::EmptyInput)
            | Self::DragDropSort(DragDropSortError::EmptyInput)
            | Self::ImageRegion(ImageRegionError::EmptyInput) => "empty_input",
            Self::Selection(SelectionError::BelowMinimum { .. }) => "below_minimum",
        }
    }

    /// Whether this is a blank-submission error.
    #[must_use]
    pub fn is_empty_input(&self) -> bool {
        self.category() == "empty_input"
    }
}

#[cfg(test)]
mod tests {
    use lessonplayer_core::math::BinaryOperator;

    use super::*;

    #[test]
    fn test_math_parsing_error_maps_to_input_error_with_symbol() {
        // Arrange
        let parse_error = MathParsingError::NoVariableOrNumberAfterBinaryOperator {
            operator: BinaryOperator::Multiply,
            symbol: "×".into(),
        };

        // Act
        let input_error = MathInputError::from(parse_error);

        // Assert
        assert_eq!(
            input_error,
            MathInputError::NoVariableOrNumberAfterBinaryOperator { symbol: "×".into() }
        );
        assert_eq!(
            input_error.to_string(),
            "There seems to be a variable or number missing after the × operator."
        );
    }

    #[test]
    fn test_empty_math_input_message_depends_on_mode() {
        let equation = MathInputError::EmptyInput {
            mode: MathExpressionMode::MathEquation,
        };
        let numeric = MathInputError::EmptyInput {
            mode: MathExpressionMode::NumericExpression,
        };
        assert_eq!(equation.to_string(), "Enter an equation to continue.");
        assert_eq!(numeric.to_string(), "Enter an expression to continue.");
    }

    #[test]
    fn test_answer_error_category_is_shared_for_empty_input() {
        let fraction: AnswerError = FractionInputError::EmptyInput.into();
        let selection: AnswerError = SelectionError::EmptyInput.into();
        assert_eq!(fraction.category(), "empty_input");
        assert!(selection.is_empty_input());
        assert_eq!(
            AnswerError::from(RatioInputError::InvalidSize { expected: 3 }).category(),
            "invalid_size"
        );
    }

    #[test]
    fn test_answer_error_display_is_learner_message() {
        let error: AnswerError = FractionInputError::DivisionByZero.into();
        assert_eq!(error.to_string(), "Please do not put 0 in the denominator");
    }
}
