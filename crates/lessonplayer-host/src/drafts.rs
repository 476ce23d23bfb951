//! File-backed draft store.
//!
//! One JSON file per state under a root directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lessonplayer_core::draft::{DraftStore, WidgetDraft};
use lessonplayer_core::error::PlayerError;
use tracing::debug;

/// Stores drafts as `<root>/<state name>.json`.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
    root: PathBuf,
}

impl FileDraftStore {
    /// Creates a store rooted at `root`. The directory is created on the
    /// first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory drafts are written to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, state_name: &str) -> PathBuf {
        let file_stem: String = state_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.root.join(format!("{file_stem}.json"))
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> PlayerError {
    PlayerError::Infrastructure(format!("failed to {action} {}: {err}", path.display()))
}

#[async_trait]
impl DraftStore for FileDraftStore {
    async fn save_draft(&self, state_name: &str, draft: &WidgetDraft) -> Result<(), PlayerError> {
        let json = draft.to_json(state_name)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error("create", &self.root, &e))?;
        let path = self.path_for(state_name);
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| io_error("write", &path, &e))?;
        debug!(state_name, path = %path.display(), "draft saved");
        Ok(())
    }

    async fn load_draft(&self, state_name: &str) -> Result<Option<WidgetDraft>, PlayerError> {
        let path = self.path_for(state_name);
        match tokio::fs::read_to_string(&path).await {
            Ok(json) => WidgetDraft::from_json(state_name, &json).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read", &path, &e)),
        }
    }

    async fn clear_draft(&self, state_name: &str) -> Result<(), PlayerError> {
        let path = self.path_for(state_name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove", &path, &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn draft() -> WidgetDraft {
        WidgetDraft {
            interaction_id: "NumericInput".into(),
            raw_text: "3.5".into(),
            last_error_category: None,
        }
    }

    #[tokio::test]
    async fn test_save_then_load_returns_draft() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let store = FileDraftStore::new(dir.path().join("drafts"));

        // Act
        store.save_draft("Fractions 1", &draft()).await.unwrap();
        let loaded = store.load_draft("Fractions 1").await.unwrap();

        // Assert
        assert_eq!(loaded, Some(draft()));
        assert!(store.root().join("Fractions_1.json").exists());
    }

    #[tokio::test]
    async fn test_load_missing_draft_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileDraftStore::new(dir.path());

        assert_eq!(store.load_draft("Nowhere").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_removes_draft_and_tolerates_missing() {
        let dir = TempDir::new().unwrap();
        let store = FileDraftStore::new(dir.path());
        store.save_draft("Intro", &draft()).await.unwrap();

        store.clear_draft("Intro").await.unwrap();
        store.clear_draft("Intro").await.unwrap();

        assert_eq!(store.load_draft("Intro").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_draft_is_reported() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Intro.json"), "{not json").unwrap();
        let store = FileDraftStore::new(dir.path());

        match store.load_draft("Intro").await.unwrap_err() {
            PlayerError::Draft { state_name, .. } => assert_eq!(state_name, "Intro"),
            other => panic!("expected Draft, got {other:?}"),
        }
    }
}
