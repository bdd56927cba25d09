//! HTTP transport configuration.

use std::time::Duration;

use serde::Deserialize;

/// Path of the status endpoint.
pub const STATUS_PATH: &str = "/api/status";
/// Path of the command endpoint.
pub const COMMAND_PATH: &str = "/api/hmi";

/// Configuration for the polling transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Scheme, host and port of the device, e.g. `http://192.168.4.1`.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.4.1".to_string(),
            request_timeout_ms: 2_000,
        }
    }
}

impl HttpConfig {
    /// Full URL of the status endpoint.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("{}{STATUS_PATH}", self.base_url.trim_end_matches('/'))
    }

    /// Full URL of the command endpoint.
    #[must_use]
    pub fn command_url(&self) -> String {
        format!("{}{COMMAND_PATH}", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url, "http://192.168.4.1");
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn should_build_endpoint_urls() {
        let config = HttpConfig {
            base_url: "http://10.0.0.7:8080".to_string(),
            ..HttpConfig::default()
        };
        assert_eq!(config.status_url(), "http://10.0.0.7:8080/api/status");
        assert_eq!(config.command_url(), "http://10.0.0.7:8080/api/hmi");
    }

    #[test]
    fn should_ignore_trailing_slash() {
        let config = HttpConfig {
            base_url: "http://device.local/".to_string(),
            ..HttpConfig::default()
        };
        assert_eq!(config.status_url(), "http://device.local/api/status");
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: HttpConfig = toml::from_str(r#"base_url = "http://wrapper""#).unwrap();
        assert_eq!(config.base_url, "http://wrapper");
        assert_eq!(config.request_timeout_ms, 2_000);
    }
}
