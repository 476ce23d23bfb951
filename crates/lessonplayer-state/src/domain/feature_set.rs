//! Player capability flags.
//!
//! A `FeatureSet` is a monoid under [`FeatureSet::merge`]: per-flag logical
//! OR, with the all-false default as identity. Players are configured by
//! registering one single-flag set per capability and merging them all.

use std::iter::Sum;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// Capabilities enabled for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FeatureSet {
    /// Show the state's main content.
    pub content_support: bool,
    /// Show feedback for submitted answers.
    pub feedback_support: bool,
    /// Show the answer widget for pending states.
    pub interaction_support: bool,
    /// Show previously submitted answers.
    pub past_answer_support: bool,
    /// Collapse earlier wrong answers behind a header.
    pub wrong_answer_collapsing: bool,
    /// Allow navigating to the previous state.
    pub backward_navigation: bool,
    /// Allow navigating to the next state.
    pub forward_navigation: bool,
    /// Offer a replay button at the end.
    pub replay_support: bool,
    /// Offer a return-to-topic button at the end.
    pub return_to_topic: bool,
    /// Congratulate the learner on a correct answer.
    pub show_congratulations_on_correct_answer: bool,
    /// Celebrate when the learner reaches the end.
    pub show_celebration_at_end_of_session: bool,
}

impl FeatureSet {
    /// Per-flag logical OR of `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            content_support: self.content_support || other.content_support,
            feedback_support: self.feedback_support || other.feedback_support,
            interaction_support: self.interaction_support || other.interaction_support,
            past_answer_support: self.past_answer_support || other.past_answer_support,
            wrong_answer_collapsing: self.wrong_answer_collapsing || other.wrong_answer_collapsing,
            backward_navigation: self.backward_navigation || other.backward_navigation,
            forward_navigation: self.forward_navigation || other.forward_navigation,
            replay_support: self.replay_support || other.replay_support,
            return_to_topic: self.return_to_topic || other.return_to_topic,
            show_congratulations_on_correct_answer: self.show_congratulations_on_correct_answer
                || other.show_congratulations_on_correct_answer,
            show_celebration_at_end_of_session: self.show_celebration_at_end_of_session
                || other.show_celebration_at_end_of_session,
        }
    }
}

impl BitOr for FeatureSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}

impl Sum for FeatureSet {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::merge)
    }
}

impl FromIterator<FeatureSet> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = FeatureSet>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

/// Builds a player's `FeatureSet` one capability at a time.
#[derive(Debug, Clone, Default)]
pub struct PlayerFeatureSetBuilder {
    feature_sets: Vec<FeatureSet>,
}

macro_rules! capability {
    ($(#[$doc:meta])* $method:ident => $flag:ident) => {
        $(#[$doc])*
        #[must_use]
        pub fn $method(mut self) -> Self {
            self.feature_sets.push(FeatureSet {
                $flag: true,
                ..FeatureSet::default()
            });
            self
        }
    };
}

impl PlayerFeatureSetBuilder {
    /// Creates a builder with no capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    capability!(
        /// Enables the main content item.
        add_content_support => content_support
    );
    capability!(
        /// Enables feedback items.
        add_feedback_support => feedback_support
    );
    capability!(
        /// Enables the answer widget.
        add_interaction_support => interaction_support
    );
    capability!(
        /// Enables submitted-answer items.
        add_past_answers_support => past_answer_support
    );
    capability!(
        /// Enables collapsing of earlier wrong answers.
        add_wrong_answer_collapsing_support => wrong_answer_collapsing
    );
    capability!(
        /// Enables the previous button.
        add_backward_navigation_support => backward_navigation
    );
    capability!(
        /// Enables next, continue and submit buttons.
        add_forward_navigation_support => forward_navigation
    );
    capability!(
        /// Enables the replay button.
        add_replay_button_support => replay_support
    );
    capability!(
        /// Enables the return-to-topic button.
        add_return_to_topic_support => return_to_topic
    );
    capability!(
        /// Enables congratulations on correct answers.
        add_congratulations_for_correct_answers => show_congratulations_on_correct_answer
    );
    capability!(
        /// Enables the end-of-session celebration.
        add_celebration_for_end_of_session => show_celebration_at_end_of_session
    );

    /// Merges every registered capability.
    #[must_use]
    pub fn build(&self) -> FeatureSet {
        self.feature_sets.iter().copied().collect()
    }

    /// Capabilities of the lesson (exploration) player.
    #[must_use]
    pub fn exploration_player() -> Self {
        Self::new()
            .add_content_support()
            .add_feedback_support()
            .add_interaction_support()
            .add_past_answers_support()
            .add_wrong_answer_collapsing_support()
            .add_backward_navigation_support()
            .add_forward_navigation_support()
            .add_return_to_topic_support()
            .add_congratulations_for_correct_answers()
            .add_celebration_for_end_of_session()
    }

    /// Capabilities of the practice (question) player.
    #[must_use]
    pub fn question_player() -> Self {
        Self::new()
            .add_content_support()
            .add_feedback_support()
            .add_interaction_support()
            .add_past_answers_support()
            .add_wrong_answer_collapsing_support()
            .add_forward_navigation_support()
            .add_replay_button_support()
            .add_return_to_topic_support()
            .add_congratulations_for_correct_answers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<FeatureSet> {
        let builder = PlayerFeatureSetBuilder::new();
        vec![
            FeatureSet::default(),
            builder.clone().add_content_support().build(),
            builder.clone().add_replay_button_support().add_feedback_support().build(),
            PlayerFeatureSetBuilder::exploration_player().build(),
            PlayerFeatureSetBuilder::question_player().build(),
        ]
    }

    #[test]
    fn test_merge_is_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.merge(b), b.merge(a));
            }
        }
    }

    #[test]
    fn test_merge_is_associative() {
        for a in samples() {
            for b in samples() {
                for c in samples() {
                    assert_eq!(a.merge(b).merge(c), a.merge(b.merge(c)));
                }
            }
        }
    }

    #[test]
    fn test_default_is_identity() {
        for a in samples() {
            assert_eq!(a.merge(FeatureSet::default()), a);
            assert_eq!(FeatureSet::default().merge(a), a);
        }
    }

    #[test]
    fn test_builder_merges_registered_capabilities() {
        // Arrange
        let builder = PlayerFeatureSetBuilder::new()
            .add_content_support()
            .add_backward_navigation_support();

        // Act
        let features = builder.build();

        // Assert
        assert_eq!(
            features,
            FeatureSet {
                content_support: true,
                backward_navigation: true,
                ..FeatureSet::default()
            }
        );
    }

    #[test]
    fn test_empty_builder_builds_default() {
        assert_eq!(PlayerFeatureSetBuilder::new().build(), FeatureSet::default());
    }

    #[test]
    fn test_bit_or_and_sum_agree_with_merge() {
        let [a, b, c] = [samples()[1], samples()[2], samples()[4]];

        assert_eq!(a | b, a.merge(b));
        assert_eq!([a, b, c].into_iter().sum::<FeatureSet>(), a.merge(b).merge(c));
    }

    #[test]
    fn test_presets_differ_in_navigation() {
        let exploration = PlayerFeatureSetBuilder::exploration_player().build();
        let question = PlayerFeatureSetBuilder::question_player().build();

        assert!(exploration.backward_navigation && !question.backward_navigation);
        assert!(question.replay_support && !exploration.replay_support);
        assert!(exploration.show_celebration_at_end_of_session);
    }

    #[test]
    fn test_feature_set_deserializes_missing_flags_as_false() {
        let features: FeatureSet = serde_json::from_str(r#"{"content_support": true}"#).unwrap();

        assert!(features.content_support);
        assert!(!features.forward_navigation);
    }
}
