//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `wraphmi.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use wraphmi_adapter_console::ConsoleConfig;
use wraphmi_adapter_http_reqwest::HttpConfig;
use wraphmi_adapter_ws_tungstenite::WsConfig;
use wraphmi_app::poll_client::PollSettings;
use wraphmi_app::stream_client::StreamSettings;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the wrapping machine lives.
    pub device: DeviceConfig,
    /// Transport selection and timers.
    pub transport: TransportConfig,
    /// Terminal panel settings.
    pub display: DisplayConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Device address.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Hostname or IP of the controller.
    pub host: String,
    /// Port of the REST API.
    pub http_port: u16,
    /// Port of the WebSocket endpoint.
    pub ws_port: u16,
}

/// How status reaches the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Periodic `GET /api/status`, commands over `POST /api/hmi`.
    #[default]
    Poll,
    /// Pushed frames over a WebSocket.
    Stream,
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poll => f.write_str("poll"),
            Self::Stream => f.write_str("stream"),
        }
    }
}

impl std::str::FromStr for TransportMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "poll" => Ok(Self::Poll),
            "stream" => Ok(Self::Stream),
            _ => Err(ConfigError::Validation(format!(
                "unknown transport {s:?}, expected \"poll\" or \"stream\""
            ))),
        }
    }
}

/// Transport timers.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub mode: TransportMode,
    /// Status poll period in milliseconds.
    pub poll_interval_ms: u64,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Delay before reopening a dropped stream, in milliseconds.
    pub reconnect_delay_ms: u64,
}

/// Terminal panel settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clock refresh period in milliseconds.
    pub clock_interval_ms: u64,
    /// Log lines kept on the board.
    pub log_capacity: usize,
    /// Emit ANSI colors.
    pub color: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `wraphmi.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override cannot be parsed, or if the result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("wraphmi.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("WRAPHMI_HOST") {
            self.device.host = val;
        }
        if let Some(val) = lookup("WRAPHMI_HTTP_PORT") {
            self.device.http_port = parse_port("WRAPHMI_HTTP_PORT", &val)?;
        }
        if let Some(val) = lookup("WRAPHMI_WS_PORT") {
            self.device.ws_port = parse_port("WRAPHMI_WS_PORT", &val)?;
        }
        if let Some(val) = lookup("WRAPHMI_TRANSPORT") {
            self.transport.mode = val.parse()?;
        }
        if let Some(val) = lookup("WRAPHMI_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.device.host.trim().is_empty() {
            return Err(ConfigError::Validation("device host must not be empty".to_string()));
        }
        if self.device.http_port == 0 || self.device.ws_port == 0 {
            return Err(ConfigError::Validation("ports must be non-zero".to_string()));
        }
        let intervals = [
            ("poll_interval_ms", self.transport.poll_interval_ms),
            ("request_timeout_ms", self.transport.request_timeout_ms),
            ("reconnect_delay_ms", self.transport.reconnect_delay_ms),
            ("clock_interval_ms", self.display.clock_interval_ms),
        ];
        if let Some((name, _)) = intervals.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Validation(format!("{name} must be non-zero")));
        }
        if self.display.log_capacity == 0 {
            return Err(ConfigError::Validation("log_capacity must be non-zero".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            base_url: format!("http://{}:{}", self.device.host, self.device.http_port),
            request_timeout_ms: self.transport.request_timeout_ms,
        }
    }

    #[must_use]
    pub fn ws_config(&self) -> WsConfig {
        WsConfig {
            url: format!("ws://{}:{}/", self.device.host, self.device.ws_port),
            ..WsConfig::default()
        }
    }

    #[must_use]
    pub fn console_config(&self) -> ConsoleConfig {
        ConsoleConfig {
            color: self.display.color,
            log_capacity: self.display.log_capacity,
        }
    }

    #[must_use]
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            poll_interval: Duration::from_millis(self.transport.poll_interval_ms),
            clock_interval: self.clock_interval(),
        }
    }

    #[must_use]
    pub fn stream_settings(&self) -> StreamSettings {
        StreamSettings {
            reconnect_delay: Duration::from_millis(self.transport.reconnect_delay_ms),
            clock_interval: self.clock_interval(),
        }
    }

    fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.display.clock_interval_ms)
    }
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|source| ConfigError::Port {
        name,
        value: value.to_string(),
        source,
    })
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            host: "192.168.4.1".to_string(),
            http_port: 80,
            ws_port: 81,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            mode: TransportMode::Poll,
            poll_interval_ms: 1_000,
            request_timeout_ms: 2_000,
            reconnect_delay_ms: 5_000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1_000,
            log_capacity: 100,
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "wraphmi=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A port override is not a valid port number.
    #[error("invalid {name} value {value:?}")]
    Port {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
