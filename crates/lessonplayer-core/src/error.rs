//! Player error types.

use thiserror::Error;

/// Top-level error type for configuration, wiring and infrastructure
/// failures. Learner input errors are never reported through this type.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// No widget factory is registered for the interaction id.
    #[error("no answer widget registered for interaction: {0}")]
    UnknownInteraction(String),

    /// Previous responses were toggled while collapsing support is disabled.
    #[error("previous responses cannot be toggled: collapsing support is disabled")]
    CollapsingDisabled,

    /// Previous responses were toggled but the current state has none.
    #[error("previous responses cannot be toggled: there are no previous responses")]
    NoPreviousResponses,

    /// Player configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A draft could not be serialized or restored.
    #[error("draft error for state {state_name}: {reason}")]
    Draft {
        /// The state the draft belongs to.
        state_name: String,
        /// What went wrong.
        reason: String,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
