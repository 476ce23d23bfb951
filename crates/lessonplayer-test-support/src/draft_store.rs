//! Test draft stores — mock `DraftStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use lessonplayer_core::draft::{DraftStore, WidgetDraft};
use lessonplayer_core::error::PlayerError;

/// A draft store that keeps drafts in memory and records every save.
#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    drafts: Mutex<HashMap<String, WidgetDraft>>,
    saves: Mutex<Vec<(String, WidgetDraft)>>,
}

impl InMemoryDraftStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one draft.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn with_draft(state_name: &str, draft: WidgetDraft) -> Self {
        let store = Self::new();
        store
            .drafts
            .lock()
            .unwrap()
            .insert(state_name.to_owned(), draft);
        store
    }

    /// Returns a snapshot of every draft saved, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_drafts(&self) -> Vec<(String, WidgetDraft)> {
        self.saves.lock().unwrap().clone()
    }

    /// Returns the draft currently stored for a state.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn current(&self, state_name: &str) -> Option<WidgetDraft> {
        self.drafts.lock().unwrap().get(state_name).cloned()
    }
}

#[async_trait]
impl DraftStore for InMemoryDraftStore {
    async fn save_draft(&self, state_name: &str, draft: &WidgetDraft) -> Result<(), PlayerError> {
        self.drafts
            .lock()
            .unwrap()
            .insert(state_name.to_owned(), draft.clone());
        self.saves
            .lock()
            .unwrap()
            .push((state_name.to_owned(), draft.clone()));
        Ok(())
    }

    async fn load_draft(&self, state_name: &str) -> Result<Option<WidgetDraft>, PlayerError> {
        Ok(self.drafts.lock().unwrap().get(state_name).cloned())
    }

    async fn clear_draft(&self, state_name: &str) -> Result<(), PlayerError> {
        self.drafts.lock().unwrap().remove(state_name);
        Ok(())
    }
}

/// A draft store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingDraftStore;

#[async_trait]
impl DraftStore for FailingDraftStore {
    async fn save_draft(&self, _state_name: &str, _draft: &WidgetDraft) -> Result<(), PlayerError> {
        Err(PlayerError::Infrastructure("disk full".into()))
    }

    async fn load_draft(&self, _state_name: &str) -> Result<Option<WidgetDraft>, PlayerError> {
        Err(PlayerError::Infrastructure("disk full".into()))
    }

    async fn clear_draft(&self, _state_name: &str) -> Result<(), PlayerError> {
        Err(PlayerError::Infrastructure("disk full".into()))
    }
}
