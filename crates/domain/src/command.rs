//! Command — an operator action forwarded to the device.

use serde::{Deserialize, Serialize};

/// Fire-and-forget command sent from the panel to the device.
///
/// Serializes as `{"type": "<name>", "data": <number|null>}`; `data` is always
/// present on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name understood by the device (`start`, `stop`, …).
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional numeric argument.
    pub data: Option<f64>,
}

impl Command {
    /// Build a command with an optional numeric argument.
    #[must_use]
    pub fn new(kind: impl Into<String>, data: Option<f64>) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Build a command without argument.
    #[must_use]
    pub fn simple(kind: impl Into<String>) -> Self {
        Self::new(kind, None)
    }

    /// Encode as a JSON text frame / request body.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; only non-finite `data`
    /// values are rejected.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        if let Some(value) = self.data.filter(|v| !v.is_finite()) {
            return Err(serde::ser::Error::custom(format!(
                "command data must be finite, got {value}"
            )));
        }
        serde_json::to_string(self)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.kind)?;
        if let Some(data) = self.data {
            write!(f, " {data}")?;
        }
        Ok(())
    }
}
