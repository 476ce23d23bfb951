//! Lesson player command-line host.
//!
//! Reads a state snapshot from `LESSONPLAYER_SNAPSHOT`, assembles it with the
//! capabilities from `LESSONPLAYER_FEATURES` (exploration player if unset)
//! and prints the display list as JSON.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use lessonplayer_core::snapshot::StateSnapshot;
use lessonplayer_host::celebration::{Celebrations, DEFAULT_END_OF_SESSION_DELAY};
use lessonplayer_host::drafts::FileDraftStore;
use lessonplayer_host::error::HostError;
use lessonplayer_host::state::PlayerHost;
use lessonplayer_interactions::application::registry::WidgetRegistry;
use lessonplayer_state::application::config::PlayerConfig;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    // Read configuration from environment.
    let snapshot_path = std::env::var("LESSONPLAYER_SNAPSHOT").map_err(|_| {
        HostError::Config("LESSONPLAYER_SNAPSHOT environment variable must be set".into())
    })?;
    let config = match std::env::var("LESSONPLAYER_FEATURES") {
        Ok(path) => PlayerConfig::from_yaml(&tokio::fs::read_to_string(path).await?)?,
        Err(_) => PlayerConfig::exploration(),
    };
    let delay = match std::env::var("CELEBRATION_DELAY_MS") {
        Ok(value) => Duration::from_millis(value.parse().map_err(|e| {
            HostError::Config(format!("CELEBRATION_DELAY_MS must be a valid u64: {e}"))
        })?),
        Err(_) => DEFAULT_END_OF_SESSION_DELAY,
    };
    let drafts_dir = std::env::var("LESSONPLAYER_DRAFTS_DIR")
        .unwrap_or_else(|_| ".lessonplayer-drafts".to_string());

    let snapshot: StateSnapshot =
        serde_json::from_str(&tokio::fs::read_to_string(&snapshot_path).await?)?;
    tracing::info!(state_name = %snapshot.state_name, "Assembling lesson state");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut host = PlayerHost::new(
        Arc::new(WidgetRegistry::default()),
        config.feature_set(),
        Arc::new(FileDraftStore::new(drafts_dir)),
        Celebrations::new(tx, delay),
    );

    let items = host.show(snapshot).await?;
    println!("{}", serde_json::to_string_pretty(items)?);

    // Let a scheduled celebration fire before exiting.
    tokio::time::sleep(delay + Duration::from_millis(10)).await;
    while let Ok(event) = rx.try_recv() {
        println!("{}", serde_json::to_string(&event)?);
    }

    Ok(())
}
