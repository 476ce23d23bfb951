//! Math-expression parsing strategy.
//!
//! The player does not own a math parser; it consumes one through
//! [`MathExpressionParser`] and maps the closed set of [`MathParsingError`]
//! variants onto learner-facing error kinds.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which flavour of math input is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MathExpressionMode {
    /// Arithmetic with numbers only, e.g. `3 × (2 + 1)`.
    NumericExpression,
    /// Expressions over variables, e.g. `x^2 - 2xy`.
    AlgebraicExpression,
    /// An equation with exactly one `=`, e.g. `y = 2x + 1`.
    MathEquation,
}

impl MathExpressionMode {
    /// Whether variables may appear in this mode.
    #[must_use]
    pub fn allows_variables(self) -> bool {
        !matches!(self, Self::NumericExpression)
    }
}

/// Binary operators named in parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*` or `×`
    Multiply,
    /// `/` or `÷`
    Divide,
    /// `^`
    Exponentiate,
}

impl BinaryOperator {
    /// The operator's name as read aloud.
    #[must_use]
    pub fn spoken_name(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divided by",
            Self::Exponentiate => "to the power of",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Exponentiate => "exponentiation",
        };
        f.write_str(name)
    }
}

/// Every way a math expression can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathParsingError {
    /// Variables outside the allowed set appear.
    #[error("disabled variables in use: {}", .variables.join(", "))]
    DisabledVariablesInUse {
        /// The offending variables, sorted.
        variables: Vec<String>,
    },
    /// More than one `=` in an equation.
    #[error("equation has too many equals signs")]
    EquationHasTooManyEquals,
    /// No `=` in an equation.
    #[error("equation is missing an equals sign")]
    EquationIsMissingEquals,
    /// One side of an equation is empty.
    #[error("equation is missing a left or right hand side")]
    EquationMissingLhsOrRhs,
    /// An exponent contains a variable.
    #[error("exponent contains a variable expression")]
    ExponentIsVariableExpression,
    /// An exponent is larger than the supported maximum.
    #[error("exponent is too large")]
    ExponentTooLarge,
    /// A function name was cut short, e.g. `sqr(2)`.
    #[error("function name is incomplete")]
    FunctionNameIncomplete,
    /// Anything not covered by a more specific variant.
    #[error("expression could not be parsed")]
    Generic,
    /// A square root with nothing to apply to.
    #[error("square root has no operand")]
    HangingSquareRoot,
    /// A function other than the square root is used.
    #[error("unsupported function in use: {name}")]
    InvalidFunctionInUse {
        /// The function name.
        name: String,
    },
    /// Doubled parentheses, e.g. `((x))`.
    #[error("multiple redundant parentheses around {raw}")]
    MultipleRedundantParentheses {
        /// The redundantly wrapped text.
        raw: String,
    },
    /// An exponent containing another exponent.
    #[error("nested exponents are not supported")]
    NestedExponents,
    /// A binary operator with nothing after it.
    #[error("no variable or number after {operator} operator '{symbol}'")]
    NoVariableOrNumberAfterBinaryOperator {
        /// The operator.
        operator: BinaryOperator,
        /// The symbol as typed.
        symbol: String,
    },
    /// A binary operator with nothing before it.
    #[error("no variable or number before {operator} operator '{symbol}'")]
    NoVariableOrNumberBeforeBinaryOperator {
        /// The operator.
        operator: BinaryOperator,
        /// The symbol as typed.
        symbol: String,
    },
    /// A number written directly after a variable, e.g. `x2`.
    #[error("number {number} follows variable {variable}")]
    NumberAfterVariable {
        /// The number as typed.
        number: String,
        /// The variable it follows.
        variable: String,
    },
    /// Parentheses around a single term, e.g. `(2) + x`.
    #[error("redundant parentheses around individual term {raw}")]
    RedundantParenthesesForIndividualTerms {
        /// The redundantly wrapped text.
        raw: String,
    },
    /// Parentheses around the whole expression, e.g. `(x + 1)`.
    #[error("redundant parentheses around {raw}")]
    SingleRedundantParentheses {
        /// The redundantly wrapped text.
        raw: String,
    },
    /// Two numbers separated only by whitespace.
    #[error("spaces between numbers")]
    SpacesBetweenNumbers,
    /// Two binary operators in a row, e.g. `2 * / 3`.
    #[error("operator '{second}' directly follows operator '{first}'")]
    SubsequentBinaryOperators {
        /// The first operator symbol.
        first: String,
        /// The second operator symbol.
        second: String,
    },
    /// Two unary operators in a row, e.g. `--x`.
    #[error("subsequent unary operators")]
    SubsequentUnaryOperators,
    /// A term divided by zero.
    #[error("term divided by zero")]
    TermDividedByZero,
    /// Mismatched parentheses.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    /// A symbol that has no meaning in math input.
    #[error("unnecessary symbol: {symbol}")]
    UnnecessarySymbols {
        /// The symbol.
        symbol: String,
    },
    /// A variable in a numeric-only expression.
    #[error("variable used in a numeric expression")]
    VariableInNumericExpression,
}

/// A successfully parsed expression or equation.
pub trait ParsedMath: fmt::Debug + Send + Sync {
    /// LaTeX rendering. With `divide_as_fraction`, divisions render as
    /// `\frac{..}{..}` rather than `\div`.
    fn to_latex(&self, divide_as_fraction: bool) -> String;

    /// Human-readable rendering for screen readers, if one can be produced.
    fn to_human_readable(&self) -> Option<String>;

    /// Normalized plain-text rendering.
    fn to_plain_text(&self) -> String;
}

/// Strategy that turns raw learner text into a parsed expression.
pub trait MathExpressionParser: fmt::Debug + Send + Sync {
    /// Parses `raw` under `mode`. In the algebraic modes only
    /// `allowed_variables` may appear; an empty list allows every variable.
    ///
    /// # Errors
    ///
    /// Returns the `MathParsingError` describing the first problem found.
    fn parse(
        &self,
        raw: &str,
        mode: MathExpressionMode,
        allowed_variables: &[String],
    ) -> Result<Box<dyn ParsedMath>, MathParsingError>;
}
