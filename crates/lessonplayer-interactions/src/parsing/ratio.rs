//! Ratio parsing, e.g. `1:2:3`.

use crate::domain::errors::RatioInputError;

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Advisory check run on every edit.
#[must_use]
pub fn real_time_error(text: &str) -> Option<RatioInputError> {
    let compact = strip_whitespace(text);
    if compact.is_empty() {
        return None;
    }
    if !compact.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return Some(RatioInputError::InvalidChars);
    }
    if compact.contains("::") {
        return Some(RatioInputError::InvalidColons);
    }
    None
}

/// Authoritative check run on submit. `number_of_terms` of zero accepts any
/// number of terms.
#[must_use]
pub fn submit_time_error(text: &str, number_of_terms: usize) -> Option<RatioInputError> {
    let Some(terms) = parse(text) else {
        return Some(RatioInputError::InvalidFormat);
    };
    if number_of_terms != 0 && terms.len() != number_of_terms {
        return Some(RatioInputError::InvalidSize {
            expected: number_of_terms,
        });
    }
    if terms.contains(&0) {
        return Some(RatioInputError::IncludesZero);
    }
    None
}

/// Parses `text` into its terms. A ratio has at least two terms.
#[must_use]
pub fn parse(text: &str) -> Option<Vec<u32>> {
    let compact = strip_whitespace(text);
    let terms = compact
        .split(':')
        .map(|term| {
            if term.is_empty() || !term.bytes().all(|b| b.is_ascii_digit()) {
                None
            } else {
                term.parse().ok()
            }
        })
        .collect::<Option<Vec<u32>>>()?;
    (terms.len() >= 2).then_some(terms)
}

/// Renders terms as `1:2:3`.
#[must_use]
pub fn to_answer_string(terms: &[u32]) -> String {
    terms
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(":")
}

/// Renders terms for screen readers as `1 to 2 to 3`.
#[must_use]
pub fn to_accessible_string(terms: &[u32]) -> String {
    terms
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" to ")
}
