//! Recursive-descent parser and learner-error checks.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/') unary | power)*     // juxtaposition multiplies
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | variable | '(' sum ')' | 'sqrt' '(' sum ')' | '√' primary
//! ```

use std::collections::BTreeSet;

use lessonplayer_core::math::{BinaryOperator, MathParsingError};

use super::expression::Expr;
use super::tokenizer::{Token, TokenKind};

/// Largest exponent accepted.
const MAX_EXPONENT: f64 = 5.0;

struct Parser<'a> {
    tokens: &'a [Token],
    source: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.position).map(|token| &token.kind)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    fn peek_operator(&self) -> Option<(BinaryOperator, char)> {
        match self.peek() {
            Some(TokenKind::Operator { operator, symbol }) => Some((*operator, *symbol)),
            _ => None,
        }
    }

    /// Checks what follows a binary operator that was just consumed.
    fn expect_operand_after(
        &self,
        operator: BinaryOperator,
        symbol: char,
    ) -> Result<(), MathParsingError> {
        match self.peek() {
            None | Some(TokenKind::CloseParenthesis | TokenKind::Equals) => {
                Err(MathParsingError::NoVariableOrNumberAfterBinaryOperator {
                    operator,
                    symbol: symbol.to_string(),
                })
            }
            Some(TokenKind::Operator {
                operator: next,
                symbol: next_symbol,
            }) if !is_sign(*next) => Err(MathParsingError::SubsequentBinaryOperators {
                first: symbol.to_string(),
                second: next_symbol.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn parse_sum(&mut self) -> Result<Expr, MathParsingError> {
        let mut lhs = self.parse_product()?;
        while let Some((operator, symbol)) = self.peek_operator() {
            if !is_sign(operator) {
                break;
            }
            self.advance();
            self.expect_operand_after(operator, symbol)?;
            let rhs = self.parse_product()?;
            lhs = binary(operator, lhs, rhs, false);
        }
        Ok(lhs)
    }

    fn parse_product(&mut self) -> Result<Expr, MathParsingError> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(TokenKind::Operator {
                    operator: operator @ (BinaryOperator::Multiply | BinaryOperator::Divide),
                    symbol,
                }) => {
                    let (operator, symbol) = (*operator, *symbol);
                    self.advance();
                    self.expect_operand_after(operator, symbol)?;
                    let rhs = self.parse_unary()?;
                    lhs = binary(operator, lhs, rhs, false);
                }
                Some(kind) if starts_primary(kind) => {
                    let rhs = self.parse_power()?;
                    lhs = binary(BinaryOperator::Multiply, lhs, rhs, true);
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn parse_unary(&mut self) -> Result<Expr, MathParsingError> {
        let Some((operator, symbol)) = self.peek_operator().filter(|(op, _)| is_sign(*op)) else {
            return self.parse_power();
        };
        self.advance();
        match self.peek() {
            Some(TokenKind::Operator {
                operator: next,
                symbol: next_symbol,
            }) => {
                return Err(if is_sign(*next) {
                    MathParsingError::SubsequentUnaryOperators
                } else {
                    MathParsingError::SubsequentBinaryOperators {
                        first: symbol.to_string(),
                        second: next_symbol.to_string(),
                    }
                });
            }
            None | Some(TokenKind::CloseParenthesis | TokenKind::Equals) => {
                return Err(MathParsingError::NoVariableOrNumberAfterBinaryOperator {
                    operator,
                    symbol: symbol.to_string(),
                });
            }
            Some(_) => {}
        }
        let operand = Box::new(self.parse_power()?);
        Ok(match operator {
            BinaryOperator::Subtract => Expr::Negate(operand),
            _ => Expr::Positive(operand),
        })
    }

    fn parse_power(&mut self) -> Result<Expr, MathParsingError> {
        let base = self.parse_primary()?;
        match self.peek_operator() {
            Some((BinaryOperator::Exponentiate, symbol)) => {
                self.advance();
                self.expect_operand_after(BinaryOperator::Exponentiate, symbol)?;
                let exponent = self.parse_unary()?;
                Ok(binary(BinaryOperator::Exponentiate, base, exponent, false))
            }
            _ => Ok(base),
        }
    }

    fn parse_group_body(&mut self, open: &Token) -> Result<(Expr, String), MathParsingError> {
        let inner = self.parse_sum()?;
        match self.advance() {
            Some(close) if close.kind == TokenKind::CloseParenthesis => {
                let raw = self.source[open.end..close.start].trim().to_owned();
                Ok((inner, raw))
            }
            _ => Err(MathParsingError::UnbalancedParentheses),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr, MathParsingError> {
        let Some(token) = self.advance() else {
            return Err(MathParsingError::Generic);
        };
        match &token.kind {
            TokenKind::Number(raw) => Ok(Expr::Constant {
                value: raw
                    .parse::<f64>()
                    .map_err(|_| MathParsingError::Generic)?,
                raw: raw.clone(),
            }),
            TokenKind::Variable(name) => Ok(Expr::Variable(name.clone())),
            TokenKind::OpenParenthesis => {
                let (inner, raw) = self.parse_group_body(token)?;
                Ok(Expr::Group {
                    inner: Box::new(inner),
                    raw,
                })
            }
            TokenKind::SquareRootFunction => match self.advance() {
                Some(open) if open.kind == TokenKind::OpenParenthesis => {
                    let (inner, _) = self.parse_group_body(open)?;
                    Ok(Expr::SquareRoot(Box::new(inner)))
                }
                _ => Err(MathParsingError::HangingSquareRoot),
            },
            TokenKind::SquareRootSymbol => match self.peek() {
                Some(kind) if starts_primary(kind) => {
                    Ok(Expr::SquareRoot(Box::new(self.parse_primary()?)))
                }
                _ => Err(MathParsingError::HangingSquareRoot),
            },
            TokenKind::Operator { operator, symbol } => {
                Err(MathParsingError::NoVariableOrNumberBeforeBinaryOperator {
                    operator: *operator,
                    symbol: symbol.to_string(),
                })
            }
            TokenKind::CloseParenthesis | TokenKind::Equals => Err(MathParsingError::Generic),
        }
    }
}

fn is_sign(operator: BinaryOperator) -> bool {
    matches!(operator, BinaryOperator::Add | BinaryOperator::Subtract)
}

fn starts_primary(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number(_)
            | TokenKind::Variable(_)
            | TokenKind::OpenParenthesis
            | TokenKind::SquareRootFunction
            | TokenKind::SquareRootSymbol
    )
}

fn binary(operator: BinaryOperator, lhs: Expr, rhs: Expr, implicit: bool) -> Expr {
    Expr::Binary {
        operator,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        implicit,
    }
}

fn check_parentheses(tokens: &[Token]) -> Result<(), MathParsingError> {
    let mut depth = 0_usize;
    for token in tokens {
        match token.kind {
            TokenKind::OpenParenthesis => depth += 1,
            TokenKind::CloseParenthesis => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(MathParsingError::UnbalancedParentheses)?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(MathParsingError::UnbalancedParentheses)
    }
}

fn check_adjacent_terms(tokens: &[Token]) -> Result<(), MathParsingError> {
    for pair in tokens.windows(2) {
        match (&pair[0].kind, &pair[1].kind) {
            (TokenKind::Number(_), TokenKind::Number(_)) => {
                return Err(MathParsingError::SpacesBetweenNumbers);
            }
            (TokenKind::Variable(variable), TokenKind::Number(number)) => {
                return Err(MathParsingError::NumberAfterVariable {
                    number: number.clone(),
                    variable: variable.clone(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Collects variables that are not in `allowed_variables`. An empty allowed
/// list permits every variable.
pub(crate) fn check_variables(
    tokens: &[Token],
    allowed_variables: &[String],
) -> Result<(), MathParsingError> {
    if allowed_variables.is_empty() {
        return Ok(());
    }
    let allowed: BTreeSet<String> = allowed_variables
        .iter()
        .map(|variable| variable.to_lowercase())
        .collect();
    let disabled: BTreeSet<String> = tokens
        .iter()
        .filter_map(|token| match &token.kind {
            TokenKind::Variable(name) if !allowed.contains(name) => Some(name.clone()),
            _ => None,
        })
        .collect();
    if disabled.is_empty() {
        Ok(())
    } else {
        Err(MathParsingError::DisabledVariablesInUse {
            variables: disabled.into_iter().collect(),
        })
    }
}

fn innermost_group_raw(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Group { inner, raw } => Some(innermost_group_raw(inner).unwrap_or(raw)),
        _ => None,
    }
}

fn check_redundant_parentheses(root: &Expr) -> Result<(), MathParsingError> {
    if let Some(raw) = find_doubled_group(root) {
        return Err(MathParsingError::MultipleRedundantParentheses { raw });
    }

    if let Expr::Group { raw, .. } = root {
        return Err(MathParsingError::SingleRedundantParentheses { raw: raw.clone() });
    }

    if let Some(raw) = find_wrapped_term(root) {
        return Err(MathParsingError::RedundantParenthesesForIndividualTerms { raw });
    }
    Ok(())
}

fn children(expr: &Expr) -> Vec<&Expr> {
    match expr {
        Expr::Constant { .. } | Expr::Variable(_) => Vec::new(),
        Expr::Binary { lhs, rhs, .. } => vec![lhs, rhs],
        Expr::Negate(operand)
        | Expr::Positive(operand)
        | Expr::SquareRoot(operand)
        | Expr::Group { inner: operand, .. } => vec![operand],
    }
}

fn find_doubled_group(expr: &Expr) -> Option<String> {
    if let Expr::Group { inner, .. } = expr {
        if matches!(**inner, Expr::Group { .. }) {
            return innermost_group_raw(inner).map(str::to_owned);
        }
    }
    children(expr).into_iter().find_map(find_doubled_group)
}

fn find_wrapped_term(expr: &Expr) -> Option<String> {
    if let Expr::Group { inner, raw } = expr {
        if matches!(**inner, Expr::Constant { .. } | Expr::Variable(_)) {
            return Some(raw.clone());
        }
    }
    children(expr).into_iter().find_map(find_wrapped_term)
}

fn check_exponents(expr: &Expr) -> Result<(), MathParsingError> {
    if let Expr::Binary {
        operator: BinaryOperator::Exponentiate,
        rhs,
        ..
    } = expr
    {
        if rhs.any(&|node| {
            matches!(node, Expr::Binary { operator: BinaryOperator::Exponentiate, .. })
        }) {
            return Err(MathParsingError::NestedExponents);
        }
        if rhs.any(&|node| matches!(node, Expr::Variable(_))) {
            return Err(MathParsingError::ExponentIsVariableExpression);
        }
        if rhs.constant_value().is_some_and(|power| power > MAX_EXPONENT) {
            return Err(MathParsingError::ExponentTooLarge);
        }
    }
    children(expr).into_iter().try_for_each(check_exponents)
}

fn check_division(root: &Expr) -> Result<(), MathParsingError> {
    let divides_by_zero = root.any(&|node| match node {
        Expr::Binary {
            operator: BinaryOperator::Divide,
            rhs,
            ..
        } => rhs
            .constant_value()
            .is_some_and(|value| value.abs() < f64::EPSILON),
        _ => false,
    });
    if divides_by_zero {
        Err(MathParsingError::TermDividedByZero)
    } else {
        Ok(())
    }
}

/// Parses one side of an equation, or a whole expression, and runs the
/// learner-error checks on the result.
pub(crate) fn parse_side(tokens: &[Token], source: &str) -> Result<Expr, MathParsingError> {
    if tokens.is_empty() {
        return Err(MathParsingError::Generic);
    }
    check_parentheses(tokens)?;
    check_adjacent_terms(tokens)?;

    let mut parser = Parser {
        tokens,
        source,
        position: 0,
    };
    let expr = parser.parse_sum()?;
    if parser.position < tokens.len() {
        return Err(MathParsingError::Generic);
    }

    check_redundant_parentheses(&expr)?;
    check_exponents(&expr)?;
    check_division(&expr)?;
    Ok(expr)
}
