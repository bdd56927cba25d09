//! WebSocket adapter error types.

use std::time::Duration;

use wraphmi_domain::error::SyncError;

/// Errors specific to the WebSocket adapter.
#[derive(Debug, thiserror::Error)]
pub enum WsError {
    /// The handshake did not complete in time.
    #[error("WebSocket handshake timed out after {0:?}")]
    Timeout(Duration),

    /// The handshake failed.
    #[error("WebSocket handshake failed")]
    Handshake(#[source] tokio_tungstenite::tungstenite::Error),

    /// Reading from an established socket failed.
    #[error("WebSocket read failed")]
    Read(#[source] tokio_tungstenite::tungstenite::Error),

    /// Writing to an established socket failed.
    #[error("WebSocket write failed")]
    Write(#[source] tokio_tungstenite::tungstenite::Error),
}

impl WsError {
    /// Convert into a [`SyncError`] for propagation across the port boundary.
    #[must_use]
    pub fn into_domain(self) -> SyncError {
        SyncError::network(self)
    }
}

impl From<WsError> for SyncError {
    fn from(err: WsError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_to_network_error() {
        let err: SyncError = WsError::Timeout(Duration::from_secs(3)).into();
        assert!(matches!(err, SyncError::Network(_)));
        assert_eq!(
            err.detailed(),
            "network error: WebSocket handshake timed out after 3s"
        );
    }
}
