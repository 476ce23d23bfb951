//! Typed answers handed back to the lesson engine.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::snapshot::ContentId;

/// A parsed fraction or mixed number, e.g. `-1 2/3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fraction {
    /// Whether the value is negative.
    pub is_negative: bool,
    /// Whole-number part of a mixed number.
    pub whole_number: u32,
    /// Numerator.
    pub numerator: u32,
    /// Denominator. A bare whole number has denominator 1.
    pub denominator: u32,
}

impl Fraction {
    /// Returns the value as a floating point number.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let magnitude = f64::from(self.whole_number)
            + f64::from(self.numerator) / f64::from(self.denominator.max(1));
        if self.is_negative { -magnitude } else { magnitude }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative {
            f.write_str("-")?;
        }
        match (self.whole_number, self.numerator) {
            (whole, 0) => write!(f, "{whole}"),
            (0, numerator) => write!(f, "{numerator}/{}", self.denominator),
            (whole, numerator) => write!(f, "{whole} {numerator}/{}", self.denominator),
        }
    }
}

/// A math-expression answer with its renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathExpressionAnswer {
    /// The text the learner typed.
    pub raw_text: String,
    /// LaTeX rendering, when the expression could be rendered.
    pub latex: Option<String>,
    /// Accessible description for screen readers.
    pub description: Option<String>,
}

/// A click on an image, with the labels of every region it hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickOnImage {
    /// Normalized horizontal coordinate in `[0, 1]`.
    pub x: f64,
    /// Normalized vertical coordinate in `[0, 1]`.
    pub y: f64,
    /// Labels of the regions containing the point. Empty for the default region.
    pub labels: Vec<String>,
}

/// A validated answer, as forwarded to the lesson engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Free text.
    Text(String),
    /// A real number.
    Number(f64),
    /// A fraction or mixed number.
    Fraction(Fraction),
    /// Ratio terms, e.g. `[1, 2, 3]` for `1:2:3`.
    Ratio(Vec<u32>),
    /// A math expression or equation.
    MathExpression(MathExpressionAnswer),
    /// Ordered sets of content ids (drag-and-drop ranking, item selection).
    ContentIdSets(Vec<BTreeSet<ContentId>>),
    /// A labeled-region click.
    ImageClick(ClickOnImage),
    /// Selected choice indices.
    SelectedIndices(BTreeSet<u32>),
}

/// How a submitted answer is shown back to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "value", rename_all = "snake_case")]
pub enum AnswerDisplay {
    /// Plain text.
    Plain(String),
    /// A single HTML fragment.
    Html(String),
    /// One HTML list per slot, for ranked answers.
    HtmlList(Vec<Vec<String>>),
}

impl AnswerDisplay {
    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) | Self::Html(text) => text.is_empty(),
            Self::HtmlList(slots) => slots.iter().all(Vec::is_empty),
        }
    }
}

/// An answer together with its learner-facing rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnswer {
    /// The typed answer.
    pub answer: Answer,
    /// The rendering shown in the submitted-answer bubble.
    pub display: AnswerDisplay,
    /// Accessible description of the answer, if it differs from the display.
    #[serde(default)]
    pub content_description: Option<String>,
}

impl UserAnswer {
    /// Creates an answer displayed as plain text.
    #[must_use]
    pub fn plain(answer: Answer, text: impl Into<String>) -> Self {
        Self {
            answer,
            display: AnswerDisplay::Plain(text.into()),
            content_description: None,
        }
    }

    /// Creates an answer displayed as HTML.
    #[must_use]
    pub fn html(answer: Answer, html: impl Into<String>) -> Self {
        Self {
            answer,
            display: AnswerDisplay::Html(html.into()),
            content_description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_display_formats_mixed_number() {
        let fraction = Fraction {
            is_negative: true,
            whole_number: 1,
            numerator: 2,
            denominator: 3,
        };
        assert_eq!(fraction.to_string(), "-1 2/3");
    }

    #[test]
    fn test_fraction_display_formats_proper_and_whole_values() {
        let proper = Fraction {
            is_negative: false,
            whole_number: 0,
            numerator: 3,
            denominator: 4,
        };
        let whole = Fraction {
            is_negative: false,
            whole_number: 5,
            numerator: 0,
            denominator: 1,
        };
        assert_eq!(proper.to_string(), "3/4");
        assert_eq!(whole.to_string(), "5");
    }

    #[test]
    fn test_fraction_to_f64_applies_sign() {
        let fraction = Fraction {
            is_negative: true,
            whole_number: 2,
            numerator: 1,
            denominator: 2,
        };
        assert!((fraction.to_f64() + 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_answer_serializes_with_type_tag() {
        // Arrange
        let answer = Answer::Ratio(vec![1, 2, 3]);

        // Act
        let json = serde_json::to_value(&answer).unwrap();

        // Assert
        assert_eq!(json["type"], "ratio");
        assert_eq!(json["value"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_answer_display_is_empty_for_blank_list() {
        assert!(AnswerDisplay::HtmlList(vec![vec![], vec![]]).is_empty());
        assert!(AnswerDisplay::Plain(String::new()).is_empty());
        assert!(!AnswerDisplay::Html("<p>2</p>".into()).is_empty());
    }
}
