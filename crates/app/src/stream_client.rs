//! Streaming client — push updates over a persistent connection.
//!
//! A single connection task owns the link. Whenever the link ends, whatever
//! the cause, it waits a fixed delay and connects again, forever. Commands
//! go through the outbound handle the task publishes while the link is open.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use wraphmi_domain::command::Command;
use wraphmi_domain::connection::{ConnectionEvent, ConnectionState, DEFAULT_RECONNECT_DELAY};
use wraphmi_domain::error::SyncError;

use crate::clock::{DEFAULT_CLOCK_INTERVAL, spawn_clock};
use crate::dashboard::Dashboard;
use crate::ports::{Presenter, StreamConnector, StreamLink};

/// Timer settings of the streaming client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    pub reconnect_delay: Duration,
    pub clock_interval: Duration,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            reconnect_delay: DEFAULT_RECONNECT_DELAY,
            clock_interval: DEFAULT_CLOCK_INTERVAL,
        }
    }
}

type OutboundSlot = watch::Sender<Option<mpsc::Sender<String>>>;

/// Status sync client over a streaming transport.
pub struct StreamClient<C, P> {
    connector: Arc<C>,
    dashboard: Dashboard<P>,
    settings: StreamSettings,
    state: Arc<watch::Sender<ConnectionState>>,
    outbound: Arc<OutboundSlot>,
    tasks: Vec<JoinHandle<()>>,
}

impl<C: StreamConnector, P: Presenter> StreamClient<C, P> {
    /// Create a stopped client.
    pub fn new(connector: C, dashboard: Dashboard<P>, settings: StreamSettings) -> Self {
        let (state, _) = watch::channel(ConnectionState::default());
        let (outbound, _) = watch::channel(None);
        Self {
            connector: Arc::new(connector),
            dashboard,
            settings,
            state: Arc::new(state),
            outbound: Arc::new(outbound),
            tasks: Vec::new(),
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> &Dashboard<P> {
        &self.dashboard
    }

    /// Current connection state.
    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Watch connection state changes.
    #[must_use]
    pub fn subscribe_state(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    /// Whether the background tasks are running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Spawn the connection task and the clock. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        tracing::info!(reconnect_delay = ?self.settings.reconnect_delay, "starting stream");

        let link = LinkTask {
            connector: Arc::clone(&self.connector),
            dashboard: self.dashboard.clone(),
            reconnect_delay: self.settings.reconnect_delay,
            state: Arc::clone(&self.state),
            outbound: Arc::clone(&self.outbound),
        };
        let connection = tokio::spawn(link.run());
        let clock = spawn_clock(self.dashboard.clone(), self.settings.clock_interval);
        self.tasks = vec![connection, clock];
    }

    /// Cancel the background tasks and drop the open link, if any. Idempotent.
    pub fn stop(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        tracing::info!("stopping stream");
        for task in self.tasks.drain(..) {
            task.abort();
        }
        self.outbound.send_replace(None);
        self.state.send_replace(ConnectionState::Connecting);
    }

    /// Send a command over the open connection.
    ///
    /// Never fails: without an open connection nothing is sent and a
    /// "no connection" error line is logged.
    pub async fn send_command(&self, command: &Command) {
        let sender = self.outbound.borrow().clone();
        let Some(sender) = sender else {
            self.report_not_connected(command);
            return;
        };
        let frame = match command.to_json() {
            Ok(frame) => frame,
            Err(err) => {
                tracing::warn!(%command, %err, "cannot encode command");
                self.dashboard
                    .log_error(format!("cannot encode {}: {err}", command.kind));
                return;
            }
        };
        if sender.send(frame).await.is_err() {
            self.report_not_connected(command);
            return;
        }
        tracing::debug!(%command, "command queued on stream");
        self.dashboard.log_info(format!("→ Sent: {command}"));
    }

    fn report_not_connected(&self, command: &Command) {
        tracing::warn!(%command, error = %SyncError::NotConnected, "dropping command");
        self.dashboard
            .log_error(format!("no connection, command {} not sent", command.kind));
    }
}

impl<C, P> Drop for StreamClient<C, P> {
    fn drop(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

/// Everything the connection task needs, moved into it on start.
struct LinkTask<C, P> {
    connector: Arc<C>,
    dashboard: Dashboard<P>,
    reconnect_delay: Duration,
    state: Arc<watch::Sender<ConnectionState>>,
    outbound: Arc<OutboundSlot>,
}

impl<C: StreamConnector, P: Presenter> LinkTask<C, P> {
    async fn run(self) {
        self.state.send_replace(ConnectionState::Connecting);
        loop {
            match self.connector.connect().await {
                Ok(link) => {
                    self.transition(ConnectionEvent::Connected);
                    tracing::info!("stream connected");
                    self.dashboard.log_info("connected");
                    let cause = self.pump(link).await;
                    self.transition(ConnectionEvent::Dropped);
                    self.report_closed(&cause);
                }
                Err(err) => {
                    self.transition(ConnectionEvent::ConnectFailed);
                    tracing::warn!(error = %err.detailed(), "stream connection failed");
                    self.dashboard
                        .log_error(format!("cannot connect: {}", err.detailed()));
                }
            }

            tokio::time::sleep(self.reconnect_delay).await;
            self.transition(ConnectionEvent::RetryElapsed);
            tracing::debug!("reconnecting stream");
        }
    }

    /// Apply inbound frames until the link ends. A link that simply runs
    /// out ends with [`SyncError::Closed`].
    async fn pump(&self, link: StreamLink) -> SyncError {
        let StreamLink {
            outbound,
            mut inbound,
        } = link;
        self.outbound.send_replace(Some(outbound));

        let cause = loop {
            match inbound.recv().await {
                Some(Ok(frame)) => {
                    self.dashboard.apply_payload(&frame);
                }
                Some(Err(err)) => break err,
                None => break SyncError::Closed,
            }
        };

        self.outbound.send_replace(None);
        cause
    }

    fn report_closed(&self, cause: &SyncError) {
        let delay = self.reconnect_delay.as_secs_f64();
        if let SyncError::Closed = cause {
            tracing::warn!("stream closed");
            self.dashboard
                .log_error(format!("connection closed, reconnecting in {delay}s"));
        } else {
            tracing::warn!(error = %cause.detailed(), "stream lost");
            self.dashboard.log_error(format!(
                "connection lost: {}, reconnecting in {delay}s",
                cause.detailed()
            ));
        }
    }

    fn transition(&self, event: ConnectionEvent) {
        self.state.send_modify(|state| *state = state.on(event));
    }
}
