//! Log lines shown in the operator log pane.

use crate::time::{Timestamp, local_clock_text, now};

/// Visual treatment of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

/// One timestamped line of the log pane.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: Timestamp,
    pub message: String,
    pub severity: Severity,
}

impl LogLine {
    /// Informational line stamped with the current time.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::at(now(), message, Severity::Info)
    }

    /// Error line stamped with the current time.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::at(now(), message, Severity::Error)
    }

    #[must_use]
    pub fn at(timestamp: Timestamp, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            timestamp,
            message: message.into(),
            severity,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// `[HH:MM:SS] message`, in local time.
    #[must_use]
    pub fn render(&self) -> String {
        format!("[{}] {}", local_clock_text(&self.timestamp), self.message)
    }
}
