//! In-memory port implementations shared by the unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::time::Instant;

use wraphmi_domain::command::Command;
use wraphmi_domain::error::SyncError;
use wraphmi_domain::lamp::{Lamp, LampColor};
use wraphmi_domain::log::LogLine;
use wraphmi_domain::progress::ProgressView;
use wraphmi_domain::snapshot::StatusSnapshot;

use crate::ports::{DeviceApi, Presenter, StreamConnector, StreamLink};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Weight(String),
    WeightStatus(String),
    Lamp(Lamp, LampColor),
    Progress(ProgressView),
    Clock(String),
    Log(LogLine),
}

#[derive(Default)]
pub struct RecordingPresenter {
    calls: Mutex<Vec<Call>>,
}

impl RecordingPresenter {
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that changed a device widget (no clock, no log).
    pub fn widget_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Clock(_) | Call::Log(_)))
            .collect()
    }

    pub fn logs(&self) -> Vec<LogLine> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Log(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn log_messages(&self) -> Vec<String> {
        self.logs().into_iter().map(|l| l.message).collect()
    }

    pub fn clock_ticks(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Clock(_)))
            .count()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Presenter for RecordingPresenter {
    fn show_weight(&self, text: &str) {
        self.record(Call::Weight(text.to_string()));
    }

    fn show_weight_status(&self, text: &str) {
        self.record(Call::WeightStatus(text.to_string()));
    }

    fn show_lamp(&self, lamp: Lamp, color: LampColor) {
        self.record(Call::Lamp(lamp, color));
    }

    fn show_progress(&self, progress: &ProgressView) {
        self.record(Call::Progress(progress.clone()));
    }

    fn show_clock(&self, text: &str) {
        self.record(Call::Clock(text.to_string()));
    }

    fn append_log(&self, line: LogLine) {
        self.record(Call::Log(line));
    }
}

/// Failure a fake transport should report.
#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Http(u16),
    Network,
    Malformed,
}

impl Failure {
    pub fn into_error(self) -> SyncError {
        match self {
            Self::Http(status) => SyncError::Http { status },
            Self::Network => SyncError::network(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
            Self::Malformed => StatusSnapshot::from_json("{oops").unwrap_err(),
        }
    }
}

/// Scripted polling transport.
#[derive(Default)]
pub struct FakeDeviceApi {
    statuses: Mutex<VecDeque<Result<StatusSnapshot, Failure>>>,
    command_failure: Mutex<Option<Failure>>,
    fetches: AtomicUsize,
    sent: Mutex<Vec<Command>>,
}

impl FakeDeviceApi {
    /// Queue the outcome of the next fetch. An empty queue yields empty snapshots.
    pub fn push_status(&self, status: Result<StatusSnapshot, Failure>) {
        self.statuses.lock().unwrap().push_back(status);
    }

    pub fn fail_commands_with(&self, failure: Failure) {
        *self.command_failure.lock().unwrap() = Some(failure);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Command> {
        self.sent.lock().unwrap().clone()
    }
}

impl DeviceApi for FakeDeviceApi {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, SyncError>> + Send {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let next = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(StatusSnapshot::default()))
            .map_err(Failure::into_error);
        async move { next }
    }

    fn send_command(
        &self,
        command: &Command,
    ) -> impl Future<Output = Result<(), SyncError>> + Send {
        let result = match *self.command_failure.lock().unwrap() {
            Some(failure) => Err(failure.into_error()),
            None => {
                self.sent.lock().unwrap().push(command.clone());
                Ok(())
            }
        };
        async move { result }
    }
}

/// Scripted streaming transport. Once the script is exhausted, further
/// connection attempts never complete.
#[derive(Default)]
pub struct FakeConnector {
    links: Mutex<VecDeque<Result<StreamLink, Failure>>>,
    attempts: Mutex<Vec<Instant>>,
}

impl FakeConnector {
    pub fn push(&self, link: Result<StreamLink, Failure>) {
        self.links.lock().unwrap().push_back(link);
    }

    pub fn attempts(&self) -> Vec<Instant> {
        self.attempts.lock().unwrap().clone()
    }
}

impl StreamConnector for FakeConnector {
    fn connect(&self) -> impl Future<Output = Result<StreamLink, SyncError>> + Send {
        self.attempts.lock().unwrap().push(Instant::now());
        let next = self.links.lock().unwrap().pop_front();
        async move {
            match next {
                Some(result) => result.map_err(Failure::into_error),
                None => std::future::pending().await,
            }
        }
    }
}
