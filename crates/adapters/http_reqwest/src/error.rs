//! HTTP adapter error types.

use wraphmi_domain::error::SyncError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or the response not read.
    #[error("HTTP request failed")]
    Request(#[source] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body is not a valid status snapshot.
    #[error("failed to decode status body")]
    Decode(#[source] serde_json::Error),

    /// The command could not be encoded.
    #[error("failed to encode command")]
    Encode(#[source] serde_json::Error),
}

impl HttpError {
    /// Convert into a [`SyncError`] for propagation across the port boundary.
    #[must_use]
    pub fn into_domain(self) -> SyncError {
        match self {
            Self::Status(status) => SyncError::Http { status },
            Self::Decode(err) | Self::Encode(err) => SyncError::MalformedPayload(err),
            other => SyncError::network(other),
        }
    }
}

impl From<HttpError> for SyncError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
