//! Real-number parsing.

use crate::domain::errors::NumericInputError;

/// Longest accepted input, counting digits, `.` and `-`.
const MAX_LENGTH: usize = 15;

fn has_only_number_chars(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-')
}

/// Advisory check run on every edit.
#[must_use]
pub fn real_time_error(text: &str) -> Option<NumericInputError> {
    if text.is_empty() {
        return None;
    }
    if text.starts_with('.') {
        return Some(NumericInputError::StartingWithFloatingPoint);
    }
    if !has_only_number_chars(text)
        || text.matches('.').count() > 1
        || text.rfind('-').is_some_and(|index| index > 0)
    {
        return Some(NumericInputError::InvalidFormat);
    }
    None
}

/// Authoritative check run on submit.
#[must_use]
pub fn submit_time_error(text: &str) -> Option<NumericInputError> {
    if text.chars().count() > MAX_LENGTH {
        return Some(NumericInputError::NumberTooLong);
    }
    match parse(text) {
        Some(_) => None,
        None => Some(NumericInputError::InvalidFormat),
    }
}

/// Parses `text` as a real number. Only digits, one `.` and a leading `-`
/// are accepted, so forms like `1e5` or `inf` are rejected.
#[must_use]
pub fn parse(text: &str) -> Option<f64> {
    if text.is_empty() || !has_only_number_chars(text) || real_time_error(text).is_some() {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_time_error_flags_leading_decimal_point() {
        assert_eq!(
            real_time_error(".5"),
            Some(NumericInputError::StartingWithFloatingPoint)
        );
    }

    #[test]
    fn test_real_time_error_flags_misplaced_symbols() {
        assert_eq!(real_time_error("1.2.3"), Some(NumericInputError::InvalidFormat));
        assert_eq!(real_time_error("12-"), Some(NumericInputError::InvalidFormat));
        assert_eq!(real_time_error("1a"), Some(NumericInputError::InvalidFormat));
        assert_eq!(real_time_error("-12.5"), None);
    }

    #[test]
    fn test_submit_time_error_rejects_long_and_malformed_numbers() {
        assert_eq!(
            submit_time_error("1234567890123456"),
            Some(NumericInputError::NumberTooLong)
        );
        assert_eq!(submit_time_error("-"), Some(NumericInputError::InvalidFormat));
        assert_eq!(submit_time_error("1e5"), Some(NumericInputError::InvalidFormat));
        assert_eq!(submit_time_error("123456789012345"), None);
    }

    #[test]
    fn test_parse_reads_negative_decimal() {
        let value = parse("-2.25").unwrap();
        assert!((value + 2.25).abs() < f64::EPSILON);
    }
}
