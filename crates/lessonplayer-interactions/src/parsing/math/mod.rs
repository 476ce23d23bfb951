//! Built-in math expression parser.

pub(crate) mod expression;
mod parser;
pub(crate) mod tokenizer;

use lessonplayer_core::math::{
    MathExpressionMode, MathExpressionParser, MathParsingError, ParsedMath,
};
use tracing::debug;

use expression::MathTree;
use tokenizer::{Token, TokenKind};

/// Parser for numeric expressions, algebraic expressions and equations.
///
/// Letters are single-letter variables, juxtaposition multiplies (`2x`),
/// `^` binds tighter than unary minus on its left and is right-associative.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultMathExpressionParser;

impl MathExpressionParser for DefaultMathExpressionParser {
    fn parse(
        &self,
        raw: &str,
        mode: MathExpressionMode,
        allowed_variables: &[String],
    ) -> Result<Box<dyn ParsedMath>, MathParsingError> {
        let result = parse_tree(raw, mode, allowed_variables);
        if let Err(error) = &result {
            debug!(?mode, %error, "math input rejected");
        }
        result.map(|tree| Box::new(tree) as Box<dyn ParsedMath>)
    }
}

fn parse_tree(
    raw: &str,
    mode: MathExpressionMode,
    allowed_variables: &[String],
) -> Result<MathTree, MathParsingError> {
    let tokens = tokenizer::tokenize(raw)?;

    let has_variables = tokens
        .iter()
        .any(|token| matches!(token.kind, TokenKind::Variable(_)));
    if has_variables && !mode.allows_variables() {
        return Err(MathParsingError::VariableInNumericExpression);
    }
    if mode.allows_variables() {
        parser::check_variables(&tokens, allowed_variables)?;
    }

    let equals: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.kind == TokenKind::Equals)
        .map(|(index, _)| index)
        .collect();

    if mode == MathExpressionMode::MathEquation {
        let split = match equals.as_slice() {
            [] => return Err(MathParsingError::EquationIsMissingEquals),
            [index] => *index,
            _ => return Err(MathParsingError::EquationHasTooManyEquals),
        };
        let (lhs, rhs): (&[Token], &[Token]) = (&tokens[..split], &tokens[split + 1..]);
        if lhs.is_empty() || rhs.is_empty() {
            return Err(MathParsingError::EquationMissingLhsOrRhs);
        }
        return Ok(MathTree::Equation {
            lhs: parser::parse_side(lhs, raw)?,
            rhs: parser::parse_side(rhs, raw)?,
        });
    }

    if !equals.is_empty() {
        return Err(MathParsingError::UnnecessarySymbols {
            symbol: "=".to_owned(),
        });
    }
    Ok(MathTree::Expression(parser::parse_side(&tokens, raw)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str, mode: MathExpressionMode) -> Result<Box<dyn ParsedMath>, MathParsingError> {
        DefaultMathExpressionParser.parse(raw, mode, &[])
    }

    fn algebraic(raw: &str) -> Result<Box<dyn ParsedMath>, MathParsingError> {
        parse(raw, MathExpressionMode::AlgebraicExpression)
    }

    fn numeric(raw: &str) -> Result<Box<dyn ParsedMath>, MathParsingError> {
        parse(raw, MathExpressionMode::NumericExpression)
    }

    #[test]
    fn test_parse_renders_division_as_fraction() {
        // Act
        let parsed = numeric("1/2").unwrap();

        // Assert
        assert_eq!(parsed.to_latex(true), "\\frac{1}{2}");
        assert_eq!(parsed.to_latex(false), "1 \\div 2");
        assert_eq!(parsed.to_human_readable().unwrap(), "1 divided by 2");
    }

    #[test]
    fn test_parse_handles_implicit_multiplication_and_powers() {
        // Act
        let parsed = algebraic("2x^2 + 3").unwrap();

        // Assert
        assert_eq!(parsed.to_latex(false), "2x^{2} + 3");
        assert_eq!(parsed.to_plain_text(), "2x^2 + 3");
        assert_eq!(
            parsed.to_human_readable().unwrap(),
            "2 times x squared plus 3"
        );
    }

    #[test]
    fn test_parse_renders_square_roots() {
        let parsed = numeric("sqrt(4) + \u{221a}9").unwrap();
        assert_eq!(parsed.to_latex(false), "\\sqrt{4} + \\sqrt{9}");
    }

    #[test]
    fn test_parse_equation() {
        // Act
        let parsed = parse("y = 2x", MathExpressionMode::MathEquation).unwrap();

        // Assert
        assert_eq!(parsed.to_latex(false), "y = 2x");
        assert_eq!(parsed.to_human_readable().unwrap(), "y equals 2 times x");
    }

    #[test]
    fn test_parse_rejects_variables_in_numeric_mode() {
        assert_eq!(
            numeric("2x").unwrap_err(),
            MathParsingError::VariableInNumericExpression
        );
    }

    #[test]
    fn test_parse_lists_disabled_variables_sorted() {
        // Act
        let result = DefaultMathExpressionParser.parse(
            "2z + y + x + z",
            MathExpressionMode::AlgebraicExpression,
            &["x".to_owned()],
        );

        // Assert
        assert_eq!(
            result.unwrap_err(),
            MathParsingError::DisabledVariablesInUse {
                variables: vec!["y".to_owned(), "z".to_owned()],
            }
        );
    }

    #[test]
    fn test_parse_checks_equals_placement() {
        let equation = MathExpressionMode::MathEquation;
        assert_eq!(
            parse("x + 1", equation).unwrap_err(),
            MathParsingError::EquationIsMissingEquals
        );
        assert_eq!(
            parse("x = 1 = y", equation).unwrap_err(),
            MathParsingError::EquationHasTooManyEquals
        );
        assert_eq!(
            parse("x =", equation).unwrap_err(),
            MathParsingError::EquationMissingLhsOrRhs
        );
        assert_eq!(
            algebraic("x = 1").unwrap_err(),
            MathParsingError::UnnecessarySymbols {
                symbol: "=".to_owned()
            }
        );
    }

    #[test]
    fn test_parse_flags_redundant_parentheses() {
        assert_eq!(
            algebraic("(x + 1)").unwrap_err(),
            MathParsingError::SingleRedundantParentheses {
                raw: "x + 1".to_owned()
            }
        );
        assert_eq!(
            algebraic("2((x + 1))").unwrap_err(),
            MathParsingError::MultipleRedundantParentheses {
                raw: "x + 1".to_owned()
            }
        );
        assert_eq!(
            algebraic("2 + (x)").unwrap_err(),
            MathParsingError::RedundantParenthesesForIndividualTerms {
                raw: "x".to_owned()
            }
        );
    }

    #[test]
    fn test_parse_flags_exponent_problems() {
        assert_eq!(numeric("2^3^2").unwrap_err(), MathParsingError::NestedExponents);
        assert_eq!(
            algebraic("2^x").unwrap_err(),
            MathParsingError::ExponentIsVariableExpression
        );
        assert_eq!(numeric("2^6").unwrap_err(), MathParsingError::ExponentTooLarge);
        assert!(numeric("2^5").is_ok());
    }

    #[test]
    fn test_parse_flags_division_by_zero() {
        assert_eq!(numeric("1/0").unwrap_err(), MathParsingError::TermDividedByZero);
        assert_eq!(
            numeric("1/(2 - 2)").unwrap_err(),
            MathParsingError::TermDividedByZero
        );
    }

    #[test]
    fn test_parse_flags_operator_misuse() {
        assert_eq!(
            numeric("3 * * 2").unwrap_err(),
            MathParsingError::SubsequentBinaryOperators {
                first: "*".to_owned(),
                second: "*".to_owned()
            }
        );
        assert_eq!(
            numeric("3 - -2").map(|parsed| parsed.to_plain_text()),
            Ok("3 - -2".to_owned())
        );
        assert_eq!(
            numeric("--2").unwrap_err(),
            MathParsingError::SubsequentUnaryOperators
        );
        assert!(matches!(
            numeric("3 +").unwrap_err(),
            MathParsingError::NoVariableOrNumberAfterBinaryOperator { .. }
        ));
        assert!(matches!(
            numeric("* 3").unwrap_err(),
            MathParsingError::NoVariableOrNumberBeforeBinaryOperator { .. }
        ));
    }

    #[test]
    fn test_parse_flags_term_ordering() {
        assert_eq!(
            algebraic("x2").unwrap_err(),
            MathParsingError::NumberAfterVariable {
                number: "2".to_owned(),
                variable: "x".to_owned()
            }
        );
        assert_eq!(
            numeric("2 3").unwrap_err(),
            MathParsingError::SpacesBetweenNumbers
        );
    }

    #[test]
    fn test_parse_flags_structure_problems() {
        assert_eq!(
            numeric("(2 + 3").unwrap_err(),
            MathParsingError::UnbalancedParentheses
        );
        assert_eq!(numeric("\u{221a}").unwrap_err(), MathParsingError::HangingSquareRoot);
        assert_eq!(numeric("sqrt 4").unwrap_err(), MathParsingError::HangingSquareRoot);
    }
}
