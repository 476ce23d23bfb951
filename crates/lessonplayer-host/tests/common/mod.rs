//! Shared helpers for host integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use lessonplayer_core::draft::DraftStore;
use lessonplayer_host::celebration::{CelebrationEvent, Celebrations};
use lessonplayer_host::state::PlayerHost;
use lessonplayer_interactions::application::registry::WidgetRegistry;
use lessonplayer_state::domain::feature_set::{FeatureSet, PlayerFeatureSetBuilder};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// End-of-session delay used across host tests.
pub const TEST_CELEBRATION_DELAY: Duration = Duration::from_millis(500);

/// Build a host for the full exploration player backed by `drafts`.
pub fn build_host(drafts: Arc<dyn DraftStore>) -> (PlayerHost, UnboundedReceiver<CelebrationEvent>) {
    build_host_with_features(drafts, PlayerFeatureSetBuilder::exploration_player().build())
}

/// Build a host with custom capabilities.
pub fn build_host_with_features(
    drafts: Arc<dyn DraftStore>,
    features: FeatureSet,
) -> (PlayerHost, UnboundedReceiver<CelebrationEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let host = PlayerHost::new(
        Arc::new(WidgetRegistry::default()),
        features,
        drafts,
        Celebrations::new(tx, TEST_CELEBRATION_DELAY),
    );
    (host, rx)
}

/// Drain every event currently queued on `rx`.
pub fn drain(rx: &mut UnboundedReceiver<CelebrationEvent>) -> Vec<CelebrationEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
