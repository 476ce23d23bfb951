//! Fraction parsing.
//!
//! Accepts whole numbers (`-4`), proper or improper fractions (`3/4`) and
//! mixed numbers (`1 2/3`), each with an optional leading minus sign and
//! arbitrary whitespace around the slash.

use lessonplayer_core::answer::Fraction;

use crate::domain::errors::FractionInputError;

/// Longest digit run accepted in any part of a fraction.
const MAX_DIGITS: usize = 7;

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn longest_digit_run(text: &str) -> usize {
    text.split(|c: char| !c.is_ascii_digit())
        .map(str::len)
        .max()
        .unwrap_or(0)
}

/// Advisory check run on every edit.
#[must_use]
pub fn real_time_error(text: &str) -> Option<FractionInputError> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return None;
    }
    if !normalized
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '/' || c == '-')
    {
        return Some(FractionInputError::InvalidChars);
    }
    if normalized.starts_with('/')
        || normalized.matches('/').count() > 1
        || normalized.rfind('-').is_some_and(|index| index > 0)
    {
        return Some(FractionInputError::InvalidFormat);
    }
    None
}

/// Authoritative check run on submit. Blank input is the widget's concern;
/// here it is simply an invalid format.
#[must_use]
pub fn submit_time_error(text: &str) -> Option<FractionInputError> {
    if longest_digit_run(text) > MAX_DIGITS {
        return Some(FractionInputError::NumberTooLong);
    }
    if text.trim_end().ends_with('/') {
        return Some(FractionInputError::InvalidFormat);
    }
    match parse(text) {
        None => Some(FractionInputError::InvalidFormat),
        Some(fraction) if fraction.denominator == 0 => Some(FractionInputError::DivisionByZero),
        Some(_) => None,
    }
}

/// Parses `text` into a fraction. A zero denominator parses successfully;
/// rejecting it is left to [`submit_time_error`].
#[must_use]
pub fn parse(text: &str) -> Option<Fraction> {
    let normalized = normalize_whitespace(text);
    let (is_negative, rest) = match normalized.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, normalized.as_str()),
    };

    let Some((left, right)) = rest.split_once('/') else {
        if !is_digits(rest) {
            return None;
        }
        return Some(Fraction {
            is_negative,
            whole_number: rest.parse().ok()?,
            numerator: 0,
            denominator: 1,
        });
    };

    let denominator = right.trim();
    if !is_digits(denominator) {
        return None;
    }
    let parts: Vec<&str> = left.split_whitespace().collect();
    let (whole_number, numerator) = match parts.as_slice() {
        [numerator] if is_digits(numerator) => (0, numerator.parse().ok()?),
        [whole, numerator] if is_digits(whole) && is_digits(numerator) => {
            (whole.parse().ok()?, numerator.parse().ok()?)
        }
        _ => return None,
    };

    Some(Fraction {
        is_negative,
        whole_number,
        numerator,
        denominator: denominator.parse().ok()?,
    })
}
