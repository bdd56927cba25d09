//! Polling client — fetches status on a fixed interval and posts commands.
//!
//! A failed cycle (network error, non-success status, malformed body) is
//! logged and skipped. There is no retry and no backoff: the next tick is
//! the retry.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use wraphmi_domain::command::Command;
use wraphmi_domain::error::SyncError;

use crate::clock::{DEFAULT_CLOCK_INTERVAL, spawn_clock};
use crate::dashboard::Dashboard;
use crate::ports::{DeviceApi, Presenter};

/// Default status poll period.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Timer settings of the polling client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub poll_interval: Duration,
    pub clock_interval: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            clock_interval: DEFAULT_CLOCK_INTERVAL,
        }
    }
}

/// Status sync client over a request/response transport.
///
/// Owns its background tasks: [`start`](Self::start) spawns them,
/// [`stop`](Self::stop) (or dropping the client) cancels them.
pub struct PollClient<A, P> {
    api: Arc<A>,
    dashboard: Dashboard<P>,
    settings: PollSettings,
    tasks: Vec<JoinHandle<()>>,
}

impl<A: DeviceApi, P: Presenter> PollClient<A, P> {
    /// Create a stopped client.
    pub fn new(api: A, dashboard: Dashboard<P>, settings: PollSettings) -> Self {
        Self {
            api: Arc::new(api),
            dashboard,
            settings,
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> &Dashboard<P> {
        &self.dashboard
    }

    /// Whether the background tasks are running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Spawn the status poll loop and the clock. No-op when already running.
    ///
    /// The first poll happens immediately.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        tracing::info!(interval = ?self.settings.poll_interval, "starting status polling");

        let api = Arc::clone(&self.api);
        let dashboard = self.dashboard.clone();
        let mut ticker = tokio::time::interval(self.settings.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let poll = tokio::spawn(async move {
            loop {
                ticker.tick().await;
                poll_cycle(api.as_ref(), &dashboard).await;
            }
        });

        let clock = spawn_clock(self.dashboard.clone(), self.settings.clock_interval);
        self.tasks = vec![poll, clock];
    }

    /// Cancel the background tasks. Idempotent.
    pub fn stop(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        tracing::info!("stopping status polling");
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    /// Run a single status cycle outside the timer.
    pub async fn poll_once(&self) {
        poll_cycle(self.api.as_ref(), &self.dashboard).await;
    }

    /// Post a command to the device.
    ///
    /// Never fails: the outcome is written to the log pane.
    pub async fn send_command(&self, command: &Command) {
        match self.api.send_command(command).await {
            Ok(()) => {
                tracing::debug!(%command, "command delivered");
                self.dashboard.log_info(format!("→ Sent: {command}"));
            }
            Err(SyncError::Http { status }) => {
                tracing::warn!(%command, status, "device rejected command");
                self.dashboard
                    .log_error(format!("HTTP {status} sending {}", command.kind));
            }
            Err(err @ SyncError::Network(_)) => {
                tracing::warn!(%command, error = %err.detailed(), "command not delivered");
                self.dashboard
                    .log_error(format!("network error sending {}", command.kind));
            }
            Err(err) => {
                tracing::warn!(%command, error = %err.detailed(), "command not delivered");
                self.dashboard.log_error(format!(
                    "failed sending {}: {}",
                    command.kind,
                    err.detailed()
                ));
            }
        }
    }
}

impl<A, P> Drop for PollClient<A, P> {
    fn drop(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

async fn poll_cycle<A: DeviceApi, P: Presenter>(api: &A, dashboard: &Dashboard<P>) {
    match api.fetch_status().await {
        Ok(snapshot) => dashboard.apply_snapshot(&snapshot),
        Err(err) => {
            tracing::warn!(error = %err.detailed(), "status poll failed, skipping cycle");
            dashboard.log_error(format!("failed to fetch status: {}", err.detailed()));
        }
    }
}
