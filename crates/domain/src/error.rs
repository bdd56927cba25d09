//! Common error types used across the workspace.
//!
//! Every failure the sync client can hit ends up as a [`SyncError`]. None of
//! them is fatal: the client logs the error and waits for its next poll tick
//! or reconnect.

/// Errors surfaced by the status sync client and its transports.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The device answered with a non-success HTTP status.
    #[error("HTTP {status}")]
    Http {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The device could not be reached (DNS, refused, timeout, reset, …).
    #[error("network error")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A command was issued while no streaming connection is open.
    #[error("no connection")]
    NotConnected,

    /// The streaming connection ended without a transport error.
    #[error("connection closed")]
    Closed,

    /// A payload could not be decoded as a status snapshot.
    #[error("malformed payload")]
    MalformedPayload(#[from] serde_json::Error),
}

impl SyncError {
    /// Wrap any transport-level error as [`SyncError::Network`].
    pub fn network<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network(Box::new(err))
    }

    /// Message followed by the source chain, for the operator log pane.
    #[must_use]
    pub fn detailed(&self) -> String {
        let mut text = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            text.push_str(": ");
            text.push_str(&err.to_string());
            source = err.source();
        }
        text
    }
}
