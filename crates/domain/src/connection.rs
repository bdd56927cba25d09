//! Connection state of the streaming transport.
//!
//! ```text
//!            connected
//! Connecting ─────────▶ Open
//!     ▲   │                │ dropped / error
//!     │   │ failed         ▼
//!     │   └──────▶ ClosedPendingRetry
//!     └───────────────────┘ retry delay elapsed
//! ```
//!
//! There is no backoff growth and no retry limit.

use std::time::Duration;

/// Fixed delay between a close and the next connection attempt.
pub const DEFAULT_RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Lifecycle of the single streaming connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Open,
    ClosedPendingRetry,
}

/// Something that happened to the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEvent {
    /// The handshake succeeded.
    Connected,
    /// The handshake failed.
    ConnectFailed,
    /// An open connection was closed by either side or errored.
    Dropped,
    /// The retry delay elapsed.
    RetryElapsed,
}

impl ConnectionState {
    /// Apply an event, returning the next state.
    ///
    /// Events that make no sense in the current state leave it unchanged.
    #[must_use]
    pub fn on(self, event: ConnectionEvent) -> Self {
        match (self, event) {
            (Self::Connecting, ConnectionEvent::Connected) => Self::Open,
            (Self::Connecting, ConnectionEvent::ConnectFailed)
            | (Self::Open, ConnectionEvent::Dropped) => Self::ClosedPendingRetry,
            (Self::ClosedPendingRetry, ConnectionEvent::RetryElapsed) => Self::Connecting,
            (state, _) => state,
        }
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connecting => f.write_str("connecting"),
            Self::Open => f.write_str("open"),
            Self::ClosedPendingRetry => f.write_str("closed, retry pending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_connecting() {
        assert_eq!(ConnectionState::default(), ConnectionState::Connecting);
    }

    #[test]
    fn should_open_when_connected() {
        let state = ConnectionState::Connecting.on(ConnectionEvent::Connected);
        assert_eq!(state, ConnectionState::Open);
    }

    #[test]
    fn should_wait_for_retry_after_drop() {
        let state = ConnectionState::Open.on(ConnectionEvent::Dropped);
        assert_eq!(state, ConnectionState::ClosedPendingRetry);
    }

    #[test]
    fn should_wait_for_retry_after_failed_connect() {
        let state = ConnectionState::Connecting.on(ConnectionEvent::ConnectFailed);
        assert_eq!(state, ConnectionState::ClosedPendingRetry);
    }

    #[test]
    fn should_connect_again_after_retry_delay() {
        let state = ConnectionState::ClosedPendingRetry.on(ConnectionEvent::RetryElapsed);
        assert_eq!(state, ConnectionState::Connecting);
    }

    #[test]
    fn should_ignore_unexpected_events() {
        assert_eq!(
            ConnectionState::Open.on(ConnectionEvent::RetryElapsed),
            ConnectionState::Open
        );
        assert_eq!(
            ConnectionState::ClosedPendingRetry.on(ConnectionEvent::Connected),
            ConnectionState::ClosedPendingRetry
        );
    }

    #[test]
    fn should_cycle_forever_without_terminal_state() {
        let mut state = ConnectionState::Connecting;
        for _ in 0..3 {
            state = state
                .on(ConnectionEvent::Connected)
                .on(ConnectionEvent::Dropped)
                .on(ConnectionEvent::RetryElapsed);
            assert_eq!(state, ConnectionState::Connecting);
        }
    }

    #[test]
    fn should_default_to_five_second_delay() {
        assert_eq!(DEFAULT_RECONNECT_DELAY, Duration::from_secs(5));
    }
}
