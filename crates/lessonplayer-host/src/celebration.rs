//! Lifecycle-scoped timers for congratulations and the end-of-session
//! celebration.
//!
//! Every timer is bound to a [`LifecycleScope`] owned by the hosting screen.
//! Closing or dropping the scope aborts outstanding timers, so a callback
//! never runs after its screen is gone.

use std::time::Duration;

use serde::Serialize;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

use crate::error::HostError;

/// How long the congratulations banner stays up.
pub const CONGRATULATIONS_DURATION: Duration = Duration::from_millis(2000);

/// Default delay before the end-of-session confetti starts.
pub const DEFAULT_END_OF_SESSION_DELAY: Duration = Duration::from_millis(500);

/// Something the hosting screen should show or hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationEvent {
    /// Show the congratulations banner.
    ShowCongratulations,
    /// Hide the congratulations banner.
    HideCongratulations,
    /// Start the end-of-session confetti.
    StartEndOfSessionConfetti,
}

/// Owns the timers scheduled on behalf of one screen.
#[derive(Debug, Default)]
pub struct LifecycleScope {
    timers: Vec<AbortHandle>,
}

impl LifecycleScope {
    /// Creates a scope with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `callback` once after `delay`, unless the scope is closed first.
    /// Returns a handle the caller can use to tell whether the timer is
    /// still outstanding.
    ///
    /// # Errors
    ///
    /// Returns `HostError::NoRuntime` if called outside a tokio runtime.
    pub fn schedule_once<F>(
        &mut self,
        delay: Duration,
        callback: F,
    ) -> Result<AbortHandle, HostError>
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|_| HostError::NoRuntime)?;
        self.timers.retain(|timer| !timer.is_finished());
        let task = handle.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        let timer = task.abort_handle();
        self.timers.push(timer.clone());
        debug!(delay_ms = delay.as_millis(), pending = self.timers.len(), "timer scheduled");
        Ok(timer)
    }

    /// Number of timers that have not yet fired or been cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.iter().filter(|timer| !timer.is_finished()).count()
    }

    /// Aborts every outstanding timer.
    pub fn cancel_all(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }
}

impl Drop for LifecycleScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// Schedules celebration events onto a channel within a scope.
#[derive(Debug)]
pub struct Celebrations {
    scope: LifecycleScope,
    events: UnboundedSender<CelebrationEvent>,
    end_of_session_delay: Duration,
    confetti: Option<AbortHandle>,
}

impl Celebrations {
    /// Creates a scheduler that delivers events to `events`.
    #[must_use]
    pub fn new(events: UnboundedSender<CelebrationEvent>, end_of_session_delay: Duration) -> Self {
        Self {
            scope: LifecycleScope::new(),
            events,
            end_of_session_delay,
            confetti: None,
        }
    }

    /// Shows the congratulations banner now and hides it after
    /// [`CONGRATULATIONS_DURATION`].
    ///
    /// # Errors
    ///
    /// Returns `HostError::NoRuntime` if called outside a tokio runtime.
    pub fn congratulate(&mut self) -> Result<(), HostError> {
        send(&self.events, CelebrationEvent::ShowCongratulations);
        let events = self.events.clone();
        self.scope.schedule_once(CONGRATULATIONS_DURATION, move || {
            send(&events, CelebrationEvent::HideCongratulations);
        })?;
        Ok(())
    }

    /// Starts the confetti after the end-of-session delay. Does nothing
    /// while an earlier confetti is still scheduled; only one runs at a time.
    ///
    /// # Errors
    ///
    /// Returns `HostError::NoRuntime` if called outside a tokio runtime.
    pub fn celebrate_end_of_session(&mut self) -> Result<(), HostError> {
        if self.confetti.as_ref().is_some_and(|timer| !timer.is_finished()) {
            debug!("end-of-session confetti already scheduled");
            return Ok(());
        }
        let events = self.events.clone();
        let timer = self.scope.schedule_once(self.end_of_session_delay, move || {
            send(&events, CelebrationEvent::StartEndOfSessionConfetti);
        })?;
        self.confetti = Some(timer);
        Ok(())
    }

    /// Cancels every celebration that has not happened yet.
    pub fn cancel_all(&mut self) {
        self.confetti = None;
        self.scope.cancel_all();
    }

    /// Number of celebrations still scheduled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.scope.pending()
    }
}

fn send(events: &UnboundedSender<CelebrationEvent>, event: CelebrationEvent) {
    if events.send(event).is_err() {
        warn!(?event, "celebration receiver closed, event dropped");
    }
}
