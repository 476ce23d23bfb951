//! Tokenizer for learner math input.

use lessonplayer_core::math::{BinaryOperator, MathParsingError};

/// Functions learners commonly type that the player does not support.
const UNSUPPORTED_FUNCTIONS: &[&str] = &[
    "abs", "arccos", "arcsin", "arctan", "cos", "cosh", "cot", "csc", "exp", "ln", "log",
    "sec", "sin", "sinh", "tan", "tanh",
];

const SQUARE_ROOT_FUNCTION: &str = "sqrt";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(String),
    Variable(String),
    /// `sqrt`, which must be followed by a parenthesized operand.
    SquareRootFunction,
    /// `√`, which applies to the term right after it.
    SquareRootSymbol,
    Operator {
        operator: BinaryOperator,
        symbol: char,
    },
    Equals,
    OpenParenthesis,
    CloseParenthesis,
}

/// A token with its byte span in the source text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

fn operator_for(symbol: char) -> Option<BinaryOperator> {
    match symbol {
        '+' => Some(BinaryOperator::Add),
        '-' | '\u{2212}' => Some(BinaryOperator::Subtract),
        '*' | '\u{d7}' => Some(BinaryOperator::Multiply),
        '/' | '\u{f7}' => Some(BinaryOperator::Divide),
        '^' => Some(BinaryOperator::Exponentiate),
        _ => None,
    }
}

fn next_non_whitespace(source: &str, from: usize) -> Option<char> {
    source[from..].chars().find(|c| !c.is_whitespace())
}

/// Splits `source` into tokens.
///
/// # Errors
///
/// Returns `UnnecessarySymbols` for characters with no meaning in math
/// input, `InvalidFunctionInUse` for unsupported function names,
/// `FunctionNameIncomplete` for a truncated `sqrt` and `Generic` for
/// malformed decimals.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, MathParsingError> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let mut end = start + c.len_utf8();
            while let Some(&(index, next)) = chars.peek() {
                if !(next.is_ascii_digit() || next == '.') {
                    break;
                }
                end = index + next.len_utf8();
                chars.next();
            }
            let raw = &source[start..end];
            if raw.matches('.').count() > 1 || raw.ends_with('.') {
                return Err(MathParsingError::Generic);
            }
            tokens.push(Token {
                kind: TokenKind::Number(raw.to_owned()),
                start,
                end,
            });
            continue;
        }

        if c.is_alphabetic() {
            let mut letters = vec![(start, c)];
            while let Some(&(index, next)) = chars.peek() {
                if !next.is_alphabetic() {
                    break;
                }
                letters.push((index, next));
                chars.next();
            }
            let end = letters
                .last()
                .map_or(start, |&(index, last)| index + last.len_utf8());
            let name = source[start..end].to_lowercase();

            if name == SQUARE_ROOT_FUNCTION {
                tokens.push(Token {
                    kind: TokenKind::SquareRootFunction,
                    start,
                    end,
                });
                continue;
            }
            if UNSUPPORTED_FUNCTIONS.contains(&name.as_str()) {
                return Err(MathParsingError::InvalidFunctionInUse { name });
            }
            if name.len() >= 2
                && SQUARE_ROOT_FUNCTION.starts_with(&name)
                && next_non_whitespace(source, end) == Some('(')
            {
                return Err(MathParsingError::FunctionNameIncomplete);
            }
            // Adjacent letters are separate variables multiplied together.
            for (index, letter) in letters {
                tokens.push(Token {
                    kind: TokenKind::Variable(letter.to_lowercase().collect()),
                    start: index,
                    end: index + letter.len_utf8(),
                });
            }
            continue;
        }

        let end = start + c.len_utf8();
        let kind = match c {
            '(' => TokenKind::OpenParenthesis,
            ')' => TokenKind::CloseParenthesis,
            '=' => TokenKind::Equals,
            '\u{221a}' => TokenKind::SquareRootSymbol,
            other => match operator_for(other) {
                Some(operator) => TokenKind::Operator {
                    operator,
                    symbol: other,
                },
                None => {
                    return Err(MathParsingError::UnnecessarySymbols {
                        symbol: other.to_string(),
                    });
                }
            },
        };
        tokens.push(Token { kind, start, end });
    }

    Ok(tokens)
}
