//! Previously submitted answers and their collapsing.
//!
//! All but the most recent prior answer can be hidden behind a
//! previous-responses header. The manager remembers the hidden items so a
//! toggle can hand the host an incremental splice instead of a rebuilt list.

use lessonplayer_core::answer::UserAnswer;
use lessonplayer_core::error::PlayerError;
use lessonplayer_core::snapshot::AnswerAndFeedback;
use tracing::{debug, info};

use super::display_item::DisplayItem;
use super::feature_set::FeatureSet;

/// An incremental change to the display list.
#[derive(Debug, Clone, PartialEq)]
pub enum HistorySplice {
    /// Insert `items` starting at index `at`.
    Insert {
        /// Index of the first inserted item.
        at: usize,
        /// Items to insert, in order.
        items: Vec<DisplayItem>,
    },
    /// Remove `count` items starting at index `at`.
    Remove {
        /// Index of the first removed item.
        at: usize,
        /// Number of items to remove.
        count: usize,
    },
}

impl HistorySplice {
    /// Applies the splice to `items`.
    ///
    /// # Panics
    ///
    /// Panics if the splice does not fit `items`, i.e. it was computed
    /// against a different list.
    pub fn apply(self, items: &mut Vec<DisplayItem>) {
        match self {
            Self::Insert { at, items: inserted } => {
                items.splice(at..at, inserted);
            }
            Self::Remove { at, count } => {
                items.drain(at..at + count);
            }
        }
    }
}

/// Tracks the collapsible earlier answers of the current state.
#[derive(Debug, Clone, Default)]
pub struct AnswerHistoryManager {
    collapsing_enabled: bool,
    expanded: bool,
    collapsible: Vec<DisplayItem>,
}

impl AnswerHistoryManager {
    /// Creates a manager with earlier answers collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether earlier answers are currently shown.
    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Whether collapsing was enabled for the current state.
    #[must_use]
    pub fn collapsing_enabled(&self) -> bool {
        self.collapsing_enabled
    }

    /// The items hidden behind the header, whether or not they are shown.
    #[must_use]
    pub fn collapsible_items(&self) -> &[DisplayItem] {
        &self.collapsible
    }

    /// Appends the history items for `answers` to `items`.
    ///
    /// With collapsing enabled and more than one answer, a header counting
    /// the earlier answers comes first, and the earlier answers are only
    /// appended while expanded. The last answer is always appended, marked
    /// with `last_is_correct`.
    pub fn append_history(
        &mut self,
        items: &mut Vec<DisplayItem>,
        answers: &[AnswerAndFeedback],
        last_is_correct: bool,
        features: &FeatureSet,
    ) {
        self.collapsing_enabled = features.wrong_answer_collapsing;
        self.collapsible.clear();

        let Some((last, earlier)) = answers.split_last() else {
            return;
        };

        if !earlier.is_empty() && self.collapsing_enabled {
            items.push(DisplayItem::PreviousResponsesHeader {
                count: earlier.len(),
                expanded: self.expanded,
            });
        }

        let show_earlier = !self.collapsing_enabled || self.expanded;
        for answer in earlier {
            let answer_items = answer_items(answer, false, features);
            if show_earlier {
                items.extend(answer_items.iter().cloned());
            }
            self.collapsible.extend(answer_items);
        }

        items.extend(answer_items(last, last_is_correct, features));
        debug!(
            answers = answers.len(),
            collapsible = self.collapsible.len(),
            expanded = self.expanded,
            "appended answer history"
        );
    }

    /// Flips between showing and hiding the earlier answers, returning the
    /// splice relative to the header at `header_index`.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::CollapsingDisabled` if collapsing support is
    /// off, or `PlayerError::NoPreviousResponses` if there is nothing to show
    /// or hide.
    pub fn toggle(&mut self, header_index: usize) -> Result<HistorySplice, PlayerError> {
        if !self.collapsing_enabled {
            return Err(PlayerError::CollapsingDisabled);
        }
        if self.collapsible.is_empty() {
            return Err(PlayerError::NoPreviousResponses);
        }

        self.expanded = !self.expanded;
        info!(expanded = self.expanded, "toggled previous responses");
        let at = header_index + 1;
        Ok(if self.expanded {
            HistorySplice::Insert {
                at,
                items: self.collapsible.clone(),
            }
        } else {
            HistorySplice::Remove {
                at,
                count: self.collapsible.len(),
            }
        })
    }

    /// Hides the earlier answers without producing a splice. Used when the
    /// learner moves to another state.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::CollapsingDisabled` if collapsing support is off.
    pub fn collapse(&mut self) -> Result<(), PlayerError> {
        if !self.collapsing_enabled {
            return Err(PlayerError::CollapsingDisabled);
        }
        self.expanded = false;
        Ok(())
    }
}

fn answer_items(
    answer: &AnswerAndFeedback,
    is_correct: bool,
    features: &FeatureSet,
) -> Vec<DisplayItem> {
    let mut items = Vec::with_capacity(2);
    if features.past_answer_support {
        items.push(submitted(&answer.submitted_answer, is_correct));
    }
    if features.feedback_support && !answer.feedback_html.is_empty() {
        items.push(DisplayItem::Feedback {
            html: answer.feedback_html.clone(),
        });
    }
    items
}

fn submitted(answer: &UserAnswer, is_correct: bool) -> DisplayItem {
    DisplayItem::SubmittedAnswer {
        answer: answer.clone(),
        is_correct,
    }
}
