//! WebSocket transport configuration.

use std::time::Duration;

use serde::Deserialize;

/// Configuration for the streaming transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WsConfig {
    /// WebSocket endpoint of the device.
    pub url: String,
    /// Handshake timeout in milliseconds.
    pub connect_timeout_ms: u64,
    /// Frames buffered in each direction.
    pub buffer: usize,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            url: "ws://192.168.4.1:81/".to_string(),
            connect_timeout_ms: 3_000,
            buffer: 32,
        }
    }
}

impl WsConfig {
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
