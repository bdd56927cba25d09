//! Device ports — the two ways of talking to the wrapping machine.
//!
//! A deployment picks exactly one of them:
//!
//! - [`DeviceApi`]: request/response polling (`GET` status, `POST` command).
//! - [`StreamConnector`]: a persistent socket that pushes snapshots and
//!   accepts commands inline.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use wraphmi_domain::command::Command;
use wraphmi_domain::error::SyncError;
use wraphmi_domain::snapshot::StatusSnapshot;

/// Request/response access to the device.
pub trait DeviceApi: Send + Sync + 'static {
    /// Fetch the current status snapshot.
    ///
    /// Non-success statuses map to [`SyncError::Http`], undecodable bodies to
    /// [`SyncError::MalformedPayload`].
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, SyncError>> + Send;

    /// Deliver one command. Any success status counts; the body is ignored.
    fn send_command(
        &self,
        command: &Command,
    ) -> impl Future<Output = Result<(), SyncError>> + Send;
}

/// Opens streaming connections to the device.
pub trait StreamConnector: Send + Sync + 'static {
    /// Perform the handshake and return the established link.
    ///
    /// The adapter owns the socket; it forwards text frames through the
    /// returned channels and drops the inbound sender once the socket is
    /// closed.
    fn connect(&self) -> impl Future<Output = Result<StreamLink, SyncError>> + Send;
}

impl<T: DeviceApi> DeviceApi for Arc<T> {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, SyncError>> + Send {
        (**self).fetch_status()
    }

    fn send_command(
        &self,
        command: &Command,
    ) -> impl Future<Output = Result<(), SyncError>> + Send {
        (**self).send_command(command)
    }
}

impl<T: StreamConnector> StreamConnector for Arc<T> {
    fn connect(&self) -> impl Future<Output = Result<StreamLink, SyncError>> + Send {
        (**self).connect()
    }
}

/// Client side of an established streaming connection.
#[derive(Debug)]
pub struct StreamLink {
    /// Outbound text frames (encoded commands).
    pub outbound: mpsc::Sender<String>,
    /// Inbound text frames. An `Err` item reports why the socket failed and
    /// is followed by the end of the channel.
    pub inbound: mpsc::Receiver<Result<String, SyncError>>,
}

/// Socket side of a [`StreamLink`], held by the adapter.
#[derive(Debug)]
pub struct StreamPeer {
    /// Frames the client wants written to the socket.
    pub outbound: mpsc::Receiver<String>,
    /// Frames read from the socket, handed to the client.
    pub inbound: mpsc::Sender<Result<String, SyncError>>,
}

impl StreamLink {
    /// Create a connected link/peer pair with bounded buffers.
    #[must_use]
    pub fn pair(capacity: usize) -> (Self, StreamPeer) {
        let (out_tx, out_rx) = mpsc::channel(capacity);
        let (in_tx, in_rx) = mpsc::channel(capacity);
        (
            Self {
                outbound: out_tx,
                inbound: in_rx,
            },
            StreamPeer {
                outbound: out_rx,
                inbound: in_tx,
            },
        )
    }
}
