//! Chooses the trailing navigation control of a state.

use lessonplayer_core::snapshot::SnapshotKind;

use super::display_item::NavigationControl;
use super::feature_set::FeatureSet;

/// What the active answer widget asks of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveWidget {
    /// The widget needs a submit button.
    pub requires_explicit_submission: bool,
    /// The widget moves on by itself once answered.
    pub is_auto_navigating: bool,
}

/// The facts about a state navigation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationContext {
    /// Snapshot kind.
    pub kind: SnapshotKind,
    /// Whether the learner can navigate back.
    pub has_previous_state: bool,
    /// Whether a state follows.
    pub has_next_state: bool,
    /// Number of answers recorded for the state.
    pub answer_count: usize,
    /// The active widget, if one was built.
    pub active_widget: Option<ActiveWidget>,
}

/// Resolves the trailing controls. Only a terminal state can produce more
/// than one (replay, then return-to-topic); every other state produces at
/// most one.
#[must_use]
pub fn resolve(ctx: &NavigationContext, features: &FeatureSet) -> Vec<NavigationControl> {
    let has_previous_button = features.backward_navigation && ctx.has_previous_state;
    let widget = ctx.active_widget.unwrap_or_default();
    let completed = ctx.kind == SnapshotKind::Completed;

    if completed && !ctx.has_next_state && features.forward_navigation {
        return vec![NavigationControl::ContinueNav {
            has_previous_button,
        }];
    }
    if completed && ctx.has_next_state && ctx.answer_count > 0 && features.forward_navigation {
        return vec![NavigationControl::Next {
            has_previous_button,
        }];
    }
    if ctx.kind == SnapshotKind::Terminal {
        let mut controls = Vec::with_capacity(2);
        if features.replay_support {
            controls.push(NavigationControl::Replay);
        }
        if features.return_to_topic {
            controls.push(NavigationControl::ReturnToTopic {
                has_previous_button,
            });
        }
        return controls;
    }
    if widget.requires_explicit_submission && features.forward_navigation {
        return vec![NavigationControl::Submit {
            has_previous_button,
        }];
    }
    if !widget.is_auto_navigating && has_previous_button {
        return vec![NavigationControl::Previous];
    }
    Vec::new()
}
