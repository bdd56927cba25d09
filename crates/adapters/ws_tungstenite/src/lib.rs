//! # wraphmi-adapter-ws-tungstenite
//!
//! Streaming transport — a persistent WebSocket to the device
//! (`ws://<device-host>:81/`).
//!
//! ## How it works
//!
//! [`WsConnector::connect`] performs the handshake, splits the socket and
//! spawns two pumps:
//!
//! - the **reader** forwards text frames to the client and ends the link when
//!   the socket closes or errors (binary, ping and pong frames are ignored);
//! - the **writer** writes the client's command frames to the socket.
//!
//! Reconnecting is the client's job; this adapter only reports that the link
//! ended.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `wraphmi-app` and `wraphmi-domain`.

mod config;
mod connector;
mod error;

pub use config::WsConfig;
pub use connector::WsConnector;
pub use error::WsError;
