//! Parsed math trees and their renderings.

use lessonplayer_core::math::{BinaryOperator, ParsedMath};

/// A node of a parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Constant {
        raw: String,
        value: f64,
    },
    Variable(String),
    Binary {
        operator: BinaryOperator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        /// Multiplication written by juxtaposition, e.g. `2x`.
        implicit: bool,
    },
    Negate(Box<Expr>),
    Positive(Box<Expr>),
    SquareRoot(Box<Expr>),
    /// A parenthesized sub-expression; `raw` is the text between the parentheses.
    Group {
        inner: Box<Expr>,
        raw: String,
    },
}

impl Expr {
    /// Value of the node when it contains no variables.
    pub(crate) fn constant_value(&self) -> Option<f64> {
        match self {
            Self::Constant { value, .. } => Some(*value),
            Self::Variable(_) => None,
            Self::Binary {
                operator, lhs, rhs, ..
            } => {
                let (lhs, rhs) = (lhs.constant_value()?, rhs.constant_value()?);
                Some(match operator {
                    BinaryOperator::Add => lhs + rhs,
                    BinaryOperator::Subtract => lhs - rhs,
                    BinaryOperator::Multiply => lhs * rhs,
                    BinaryOperator::Divide => lhs / rhs,
                    BinaryOperator::Exponentiate => lhs.powf(rhs),
                })
            }
            Self::Negate(operand) => operand.constant_value().map(|value| -value),
            Self::Positive(operand) | Self::Group { inner: operand, .. } => operand.constant_value(),
            Self::SquareRoot(operand) => operand.constant_value().map(f64::sqrt),
        }
    }

    /// Whether any node satisfies `predicate`, this one included.
    pub(crate) fn any(&self, predicate: &dyn Fn(&Expr) -> bool) -> bool {
        if predicate(self) {
            return true;
        }
        match self {
            Self::Constant { .. } | Self::Variable(_) => false,
            Self::Binary { lhs, rhs, .. } => lhs.any(predicate) || rhs.any(predicate),
            Self::Negate(operand)
            | Self::Positive(operand)
            | Self::SquareRoot(operand)
            | Self::Group { inner: operand, .. } => operand.any(predicate),
        }
    }

    fn is_atom(&self) -> bool {
        matches!(
            self,
            Self::Constant { .. } | Self::Variable(_) | Self::Group { .. }
        )
    }

    fn to_plain_text(&self) -> String {
        match self {
            Self::Constant { raw, .. } => raw.clone(),
            Self::Variable(name) => name.clone(),
            Self::Binary {
                operator,
                lhs,
                rhs,
                implicit,
            } => {
                let (lhs, rhs) = (lhs.to_plain_text(), rhs.to_plain_text());
                match operator {
                    BinaryOperator::Multiply if *implicit => format!("{lhs}{rhs}"),
                    BinaryOperator::Add => format!("{lhs} + {rhs}"),
                    BinaryOperator::Subtract => format!("{lhs} - {rhs}"),
                    BinaryOperator::Multiply => format!("{lhs} \u{d7} {rhs}"),
                    BinaryOperator::Divide => format!("{lhs} \u{f7} {rhs}"),
                    BinaryOperator::Exponentiate => format!("{lhs}^{rhs}"),
                }
            }
            Self::Negate(operand) => format!("-{}", operand.to_plain_text()),
            Self::Positive(operand) => format!("+{}", operand.to_plain_text()),
            Self::SquareRoot(operand) if operand.is_atom() => {
                format!("\u{221a}{}", operand.to_plain_text())
            }
            Self::SquareRoot(operand) => format!("\u{221a}({})", operand.to_plain_text()),
            Self::Group { inner, .. } => format!("({})", inner.to_plain_text()),
        }
    }

    fn to_latex(&self, divide_as_fraction: bool) -> String {
        match self {
            Self::Constant { raw, .. } => raw.clone(),
            Self::Variable(name) => name.clone(),
            Self::Binary {
                operator,
                lhs,
                rhs,
                implicit,
            } => {
                if *operator == BinaryOperator::Divide && divide_as_fraction {
                    return format!(
                        "\\frac{{{}}}{{{}}}",
                        lhs.ungrouped().to_latex(true),
                        rhs.ungrouped().to_latex(true)
                    );
                }
                let (lhs, rhs) = (
                    lhs.to_latex(divide_as_fraction),
                    rhs.to_latex(divide_as_fraction),
                );
                match operator {
                    BinaryOperator::Multiply if *implicit => format!("{lhs}{rhs}"),
                    BinaryOperator::Add => format!("{lhs} + {rhs}"),
                    BinaryOperator::Subtract => format!("{lhs} - {rhs}"),
                    BinaryOperator::Multiply => format!("{lhs} \\times {rhs}"),
                    BinaryOperator::Divide => format!("{lhs} \\div {rhs}"),
                    BinaryOperator::Exponentiate => format!("{lhs}^{{{rhs}}}"),
                }
            }
            Self::Negate(operand) => format!("-{}", operand.to_latex(divide_as_fraction)),
            Self::Positive(operand) => format!("+{}", operand.to_latex(divide_as_fraction)),
            Self::SquareRoot(operand) => {
                format!("\\sqrt{{{}}}", operand.ungrouped().to_latex(divide_as_fraction))
            }
            Self::Group { inner, .. } => {
                format!("\\left({}\\right)", inner.to_latex(divide_as_fraction))
            }
        }
    }

    fn to_human_readable(&self) -> String {
        match self {
            Self::Constant { raw, .. } => raw.clone(),
            Self::Variable(name) => name.clone(),
            Self::Binary {
                operator,
                lhs,
                rhs,
                ..
            } => {
                let lhs_text = lhs.to_human_readable();
                if *operator == BinaryOperator::Exponentiate {
                    let power = rhs.constant_value();
                    let is_power = |n: f64| power.is_some_and(|p| (p - n).abs() < f64::EPSILON);
                    return if is_power(2.0) {
                        format!("{lhs_text} squared")
                    } else if is_power(3.0) {
                        format!("{lhs_text} cubed")
                    } else {
                        format!(
                            "{lhs_text} raised to the power of {}",
                            rhs.to_human_readable()
                        )
                    };
                }
                format!(
                    "{lhs_text} {} {}",
                    operator.spoken_name(),
                    rhs.to_human_readable()
                )
            }
            Self::Negate(operand) => format!("negative {}", operand.to_human_readable()),
            Self::Positive(operand) => format!("positive {}", operand.to_human_readable()),
            Self::SquareRoot(operand) => {
                format!("square root of {}", operand.ungrouped().to_human_readable())
            }
            Self::Group { inner, .. } => format!(
                "open parenthesis {} close parenthesis",
                inner.to_human_readable()
            ),
        }
    }

    fn ungrouped(&self) -> &Expr {
        match self {
            Self::Group { inner, .. } => inner.ungrouped(),
            other => other,
        }
    }
}

/// A parsed expression or equation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MathTree {
    Expression(Expr),
    Equation { lhs: Expr, rhs: Expr },
}

impl ParsedMath for MathTree {
    fn to_latex(&self, divide_as_fraction: bool) -> String {
        match self {
            Self::Expression(expr) => expr.to_latex(divide_as_fraction),
            Self::Equation { lhs, rhs } => format!(
                "{} = {}",
                lhs.to_latex(divide_as_fraction),
                rhs.to_latex(divide_as_fraction)
            ),
        }
    }

    fn to_human_readable(&self) -> Option<String> {
        Some(match self {
            Self::Expression(expr) => expr.to_human_readable(),
            Self::Equation { lhs, rhs } => format!(
                "{} equals {}",
                lhs.to_human_readable(),
                rhs.to_human_readable()
            ),
        })
    }

    fn to_plain_text(&self) -> String {
        match self {
            Self::Expression(expr) => expr.to_plain_text(),
            Self::Equation { lhs, rhs } => {
                format!("{} = {}", lhs.to_plain_text(), rhs.to_plain_text())
            }
        }
    }
}
