//! Player configuration loaded from YAML.
//!
//! ```yaml
//! preset: question
//! capabilities:
//!   - backward_navigation
//!   - celebration_at_end_of_session
//! ```

use lessonplayer_core::error::PlayerError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::feature_set::{FeatureSet, PlayerFeatureSetBuilder};

/// A preconfigured player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerPreset {
    /// The lesson player.
    Exploration,
    /// The practice-question player.
    Question,
}

/// A single capability that can be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Content,
    Feedback,
    Interaction,
    PastAnswers,
    WrongAnswerCollapsing,
    BackwardNavigation,
    ForwardNavigation,
    Replay,
    ReturnToTopic,
    CongratulationsForCorrectAnswers,
    CelebrationAtEndOfSession,
}

impl Capability {
    fn register(self, builder: PlayerFeatureSetBuilder) -> PlayerFeatureSetBuilder {
        match self {
            Self::Content => builder.add_content_support(),
            Self::Feedback => builder.add_feedback_support(),
            Self::Interaction => builder.add_interaction_support(),
            Self::PastAnswers => builder.add_past_answers_support(),
            Self::WrongAnswerCollapsing => builder.add_wrong_answer_collapsing_support(),
            Self::BackwardNavigation => builder.add_backward_navigation_support(),
            Self::ForwardNavigation => builder.add_forward_navigation_support(),
            Self::Replay => builder.add_replay_button_support(),
            Self::ReturnToTopic => builder.add_return_to_topic_support(),
            Self::CongratulationsForCorrectAnswers => {
                builder.add_congratulations_for_correct_answers()
            }
            Self::CelebrationAtEndOfSession => builder.add_celebration_for_end_of_session(),
        }
    }
}

/// Which capabilities a player has: an optional preset plus extra
/// capabilities merged on top.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    /// Preset to start from. Without one, only `capabilities` are enabled.
    #[serde(default)]
    pub preset: Option<PlayerPreset>,
    /// Capabilities enabled in addition to the preset.
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl PlayerConfig {
    /// Parses a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Configuration` if the YAML is malformed or names
    /// an unknown preset, capability or field.
    pub fn from_yaml(yaml: &str) -> Result<Self, PlayerError> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| PlayerError::Configuration(format!("invalid player config: {e}")))?;
        debug!(preset = ?config.preset, capabilities = config.capabilities.len(), "parsed player config");
        Ok(config)
    }

    /// The full exploration player.
    #[must_use]
    pub fn exploration() -> Self {
        Self {
            preset: Some(PlayerPreset::Exploration),
            capabilities: Vec::new(),
        }
    }

    /// Replays the preset and capabilities through the builder.
    #[must_use]
    pub fn feature_set(&self) -> FeatureSet {
        let builder = match self.preset {
            Some(PlayerPreset::Exploration) => PlayerFeatureSetBuilder::exploration_player(),
            Some(PlayerPreset::Question) => PlayerFeatureSetBuilder::question_player(),
            None => PlayerFeatureSetBuilder::new(),
        };
        self.capabilities
            .iter()
            .fold(builder, |builder, capability| capability.register(builder))
            .build()
    }
}
