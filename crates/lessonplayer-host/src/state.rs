//! The player host: one screen showing successive lesson states.
//!
//! Owns the item assembler and routes learner actions to it, keeps the
//! submit control in sync with the active widget, saves and restores drafts,
//! and schedules celebrations within the screen's lifetime.

use std::fmt;
use std::sync::Arc;

use lessonplayer_core::answer::UserAnswer;
use lessonplayer_core::draft::{DraftStore, WidgetDraft};
use lessonplayer_core::snapshot::StateSnapshot;
use lessonplayer_interactions::application::registry::WidgetRegistry;
use lessonplayer_interactions::application::submission::submit_answer;
use lessonplayer_interactions::domain::widget::{WidgetInput, WidgetNotification};
use lessonplayer_state::application::assembler::ItemAssembler;
use lessonplayer_state::domain::display_item::DisplayItem;
use lessonplayer_state::domain::feature_set::FeatureSet;
use tracing::{debug, info, instrument};

use crate::celebration::Celebrations;
use crate::error::HostError;

/// Whether the submit control is enabled, and the error shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitState {
    /// Learner-facing error, if one is showing.
    pub pending_error: Option<String>,
    /// Whether the widget has an answer to submit.
    pub answer_available: bool,
}

impl SubmitState {
    /// Submission is enabled when an answer is available and no error shows.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.answer_available && self.pending_error.is_none()
    }
}

/// Hosts the lesson player for one screen.
pub struct PlayerHost {
    features: FeatureSet,
    assembler: ItemAssembler,
    drafts: Arc<dyn DraftStore>,
    celebrations: Celebrations,
    snapshot: Option<StateSnapshot>,
    items: Vec<DisplayItem>,
    submit_state: SubmitState,
}

impl fmt::Debug for PlayerHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerHost")
            .field("features", &self.features)
            .field("assembler", &self.assembler)
            .field("state_name", &self.state_name())
            .field("items", &self.items.len())
            .field("submit_state", &self.submit_state)
            .finish_non_exhaustive()
    }
}

impl PlayerHost {
    /// Creates a host for a player with `features`.
    #[must_use]
    pub fn new(
        registry: Arc<WidgetRegistry>,
        features: FeatureSet,
        drafts: Arc<dyn DraftStore>,
        celebrations: Celebrations,
    ) -> Self {
        Self {
            features,
            assembler: ItemAssembler::new(registry),
            drafts,
            celebrations,
            snapshot: None,
            items: Vec::new(),
            submit_state: SubmitState::default(),
        }
    }

    /// Name of the state currently shown.
    #[must_use]
    pub fn state_name(&self) -> Option<&str> {
        self.snapshot.as_ref().map(|s| s.state_name.as_str())
    }

    /// The display list currently shown.
    #[must_use]
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Current submit-control state.
    #[must_use]
    pub fn submit_state(&self) -> &SubmitState {
        &self.submit_state
    }

    /// Shows `snapshot`, restoring the draft saved for its state. The draft
    /// is discarded from the store only once a widget has taken it back; a
    /// draft no widget could use stays saved.
    ///
    /// Moving to a different state collapses previous responses. Reaching
    /// the end of the lesson schedules the end-of-session celebration when
    /// enabled.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Player` if the draft store fails or the
    /// interaction has no widget, and `HostError::NoRuntime` if the
    /// celebration cannot be scheduled.
    #[instrument(skip_all, fields(state_name = %snapshot.state_name))]
    pub async fn show(&mut self, snapshot: StateSnapshot) -> Result<&[DisplayItem], HostError> {
        let moved = self
            .state_name()
            .is_some_and(|name| name != snapshot.state_name);
        if moved && self.features.wrong_answer_collapsing {
            self.assembler.collapse_previous_responses()?;
        }

        let draft = self.drafts.load_draft(&snapshot.state_name).await?;
        self.items = self
            .assembler
            .compute_with_draft(&snapshot, &self.features, draft.as_ref())?;
        let restored = draft.as_ref().is_some_and(|draft| self.draft_restored(draft));
        if restored {
            self.drafts.clear_draft(&snapshot.state_name).await?;
        } else if draft.is_some() {
            debug!("saved draft not restored, keeping it");
        }

        self.submit_state = match self.assembler.pending_widget_mut() {
            Some(widget) => {
                widget.clear_notifications();
                SubmitState {
                    pending_error: widget.current_error().map(ToString::to_string),
                    answer_available: widget.is_answer_available(),
                }
            }
            None => SubmitState::default(),
        };

        if ItemAssembler::celebration_due(snapshot.kind, &self.features) {
            self.celebrations.celebrate_end_of_session()?;
        }
        info!(items = self.items.len(), restored_draft = restored, "state shown");
        self.snapshot = Some(snapshot);
        Ok(&self.items)
    }

    fn draft_restored(&self, draft: &WidgetDraft) -> bool {
        self.assembler.pending_widget().is_some_and(|widget| {
            widget.interaction_id() == draft.interaction_id && widget.serialize_draft().is_some()
        })
    }

    /// Routes learner input to the active widget. Returns whether the widget
    /// accepted it.
    ///
    /// # Errors
    ///
    /// Returns `HostError::NoActiveWidget` if no answer widget is showing.
    pub fn handle_input(&mut self, input: WidgetInput) -> Result<bool, HostError> {
        let widget = self
            .assembler
            .pending_widget_mut()
            .ok_or(HostError::NoActiveWidget)?;
        let applied = widget.handle_input(input);
        for notification in widget.take_notifications() {
            match notification {
                WidgetNotification::ErrorOrAvailabilityChanged {
                    pending_error,
                    answer_available,
                } => {
                    self.submit_state = SubmitState {
                        pending_error,
                        answer_available,
                    };
                }
            }
        }
        Ok(applied)
    }

    /// Validates and returns the active widget's answer for the lesson
    /// engine. `Ok(None)` means the widget accepted an empty answer.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Answer` when submit-time validation fails (the
    /// error is also shown next to the submit control), or
    /// `HostError::NoActiveWidget` if no answer widget is showing.
    #[instrument(skip_all, fields(state_name = self.state_name().unwrap_or_default()))]
    pub fn submit(&mut self) -> Result<Option<UserAnswer>, HostError> {
        let widget = self
            .assembler
            .pending_widget_mut()
            .ok_or(HostError::NoActiveWidget)?;
        let result = submit_answer(&mut *widget);
        widget.clear_notifications();
        match result {
            Ok(answer) => Ok(answer),
            Err(error) => {
                self.submit_state.pending_error = Some(error.to_string());
                Err(error.into())
            }
        }
    }

    /// Reacts to the lesson engine's verdict on the last submission.
    ///
    /// # Errors
    ///
    /// Returns `HostError::NoRuntime` if congratulations cannot be scheduled.
    pub fn on_answer_outcome(&mut self, is_correct: bool) -> Result<(), HostError> {
        if ItemAssembler::congratulations_due(is_correct, &self.features) {
            self.celebrations.congratulate()?;
        }
        Ok(())
    }

    /// Shows or hides earlier answers in the current display list.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Player` if collapsing is disabled or there are no
    /// previous responses.
    #[instrument(skip_all, fields(state_name = self.state_name().unwrap_or_default()))]
    pub fn toggle_previous_responses(&mut self) -> Result<&[DisplayItem], HostError> {
        self.assembler.toggle_previous_responses(&mut self.items)?;
        Ok(&self.items)
    }

    /// Tears the screen down: saves the active widget's draft and cancels
    /// outstanding celebrations.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Player` if the draft store fails.
    #[instrument(skip_all, fields(state_name = self.state_name().unwrap_or_default()))]
    pub async fn suspend(&mut self) -> Result<(), HostError> {
        self.celebrations.cancel_all();
        let Some(state_name) = self.state_name().map(str::to_owned) else {
            return Ok(());
        };
        let draft = self
            .assembler
            .pending_widget()
            .and_then(|widget| widget.serialize_draft());
        match draft {
            Some(draft) => {
                self.drafts.save_draft(&state_name, &draft).await?;
                info!("draft saved on suspend");
            }
            None => debug!("no draft to save"),
        }
        Ok(())
    }
}
