//! Item assembler: state snapshot to display list.
//!
//! The assembler owns the state that outlives a single `compute` call: the
//! active answer widget and the history manager's expanded flag. Everything
//! else is recomputed from the snapshot each time.

use std::sync::Arc;

use lessonplayer_core::draft::WidgetDraft;
use lessonplayer_core::error::PlayerError;
use lessonplayer_core::snapshot::{SnapshotKind, StateSnapshot};
use lessonplayer_interactions::application::registry::WidgetRegistry;
use lessonplayer_interactions::domain::widget::AnswerWidget;
use tracing::{debug, info};

use crate::domain::display_item::{DisplayItem, NavigationControl};
use crate::domain::feature_set::FeatureSet;
use crate::domain::history::AnswerHistoryManager;
use crate::domain::navigation::{self, ActiveWidget, NavigationContext};

/// Builds the display list for successive states of one player.
#[derive(Debug)]
pub struct ItemAssembler {
    registry: Arc<WidgetRegistry>,
    history: AnswerHistoryManager,
    pending_widget: Option<Box<dyn AnswerWidget>>,
}

impl ItemAssembler {
    /// Creates an assembler that builds widgets through `registry`.
    #[must_use]
    pub fn new(registry: Arc<WidgetRegistry>) -> Self {
        Self {
            registry,
            history: AnswerHistoryManager::new(),
            pending_widget: None,
        }
    }

    /// Computes the display list for `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::UnknownInteraction` if the snapshot is pending
    /// and no widget is registered for its interaction.
    pub fn compute(
        &mut self,
        snapshot: &StateSnapshot,
        features: &FeatureSet,
    ) -> Result<Vec<DisplayItem>, PlayerError> {
        self.compute_with_draft(snapshot, features, None)
    }

    /// Computes the display list for `snapshot`, restoring `draft` into the
    /// new answer widget where the widget supports drafts.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::UnknownInteraction` if the snapshot is pending
    /// and no widget is registered for its interaction.
    pub fn compute_with_draft(
        &mut self,
        snapshot: &StateSnapshot,
        features: &FeatureSet,
        draft: Option<&WidgetDraft>,
    ) -> Result<Vec<DisplayItem>, PlayerError> {
        let mut items = Vec::new();
        self.pending_widget = None;

        if features.content_support && !snapshot.content.html.is_empty() {
            items.push(DisplayItem::Content(snapshot.content.clone()));
        }

        match snapshot.kind {
            SnapshotKind::Pending => {
                self.history
                    .append_history(&mut items, &snapshot.prior_answers, false, features);
                if features.interaction_support {
                    let widget = self.registry.create(&snapshot.interaction, draft)?;
                    items.push(DisplayItem::AnswerWidget {
                        interaction_id: widget.interaction_id().to_owned(),
                    });
                    self.pending_widget = Some(widget);
                }
            }
            SnapshotKind::Completed => {
                self.history
                    .append_history(&mut items, &snapshot.prior_answers, true, features);
            }
            SnapshotKind::Terminal => {}
        }

        let ctx = NavigationContext {
            kind: snapshot.kind,
            has_previous_state: snapshot.has_previous_state,
            has_next_state: snapshot.has_next_state,
            answer_count: snapshot.prior_answers.len(),
            active_widget: self.pending_widget.as_deref().map(|widget| ActiveWidget {
                requires_explicit_submission: widget.is_explicit_submission_required(),
                is_auto_navigating: widget.is_auto_navigating(),
            }),
        };
        items.extend(
            navigation::resolve(&ctx, features)
                .into_iter()
                .map(DisplayItem::Navigation),
        );

        debug!(
            state_name = %snapshot.state_name,
            kind = ?snapshot.kind,
            items = items.len(),
            "assembled display items"
        );
        Ok(items)
    }

    /// Shows or hides the earlier answers in `items`, a list previously
    /// returned by `compute`, and updates the header's expanded flag.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::CollapsingDisabled` if collapsing support is
    /// off, or `PlayerError::NoPreviousResponses` if `items` has no header
    /// or the header has nothing behind it.
    pub fn toggle_previous_responses(
        &mut self,
        items: &mut Vec<DisplayItem>,
    ) -> Result<(), PlayerError> {
        if !self.history.collapsing_enabled() {
            return Err(PlayerError::CollapsingDisabled);
        }
        let header_index = items
            .iter()
            .position(DisplayItem::is_previous_responses_header)
            .ok_or(PlayerError::NoPreviousResponses)?;
        let splice = self.history.toggle(header_index)?;
        splice.apply(items);

        let expanded_now = self.history.expanded();
        if let Some(DisplayItem::PreviousResponsesHeader { expanded, .. }) =
            items.get_mut(header_index)
        {
            *expanded = expanded_now;
        }
        Ok(())
    }

    /// Hides the earlier answers for the next `compute`.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::CollapsingDisabled` if collapsing support is off.
    pub fn collapse_previous_responses(&mut self) -> Result<(), PlayerError> {
        self.history.collapse()
    }

    /// Whether the earlier answers are currently shown.
    #[must_use]
    pub fn previous_responses_expanded(&self) -> bool {
        self.history.expanded()
    }

    /// The answer widget built by the last `compute`, if the state was
    /// pending.
    #[must_use]
    pub fn pending_widget(&self) -> Option<&dyn AnswerWidget> {
        self.pending_widget.as_deref()
    }

    /// Mutable access to the active answer widget.
    #[must_use]
    pub fn pending_widget_mut(&mut self) -> Option<&mut (dyn AnswerWidget + 'static)> {
        self.pending_widget.as_deref_mut()
    }

    /// Whether reaching a state of `kind` should start the end-of-session
    /// celebration.
    #[must_use]
    pub fn celebration_due(kind: SnapshotKind, features: &FeatureSet) -> bool {
        let due = kind == SnapshotKind::Terminal && features.show_celebration_at_end_of_session;
        if due {
            info!("end of session reached, celebration due");
        }
        due
    }

    /// Whether a correct answer should be congratulated.
    #[must_use]
    pub fn congratulations_due(is_correct: bool, features: &FeatureSet) -> bool {
        is_correct && features.show_congratulations_on_correct_answer
    }
}

/// Returns the trailing navigation controls of `items`.
#[must_use]
pub fn navigation_controls(items: &[DisplayItem]) -> Vec<NavigationControl> {
    items
        .iter()
        .filter_map(|item| match item {
            DisplayItem::Navigation(control) => Some(*control),
            _ => None,
        })
        .collect()
}
