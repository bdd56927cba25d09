//! Terminal presenter configuration.

use serde::Deserialize;

/// Configuration for the terminal presenter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Emit ANSI colors.
    pub color: bool,
    /// Number of log lines kept in the board.
    pub log_capacity: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_capacity: 100,
        }
    }
}
