//! Status snapshot — a point-in-time status record produced by the device.
//!
//! Every field is optional. An absent field (or an explicit JSON `null`)
//! means "no change", never "false" or "zero".

use serde::{Deserialize, Serialize};

use crate::error::SyncError;
use crate::lamp::Lamp;

/// Flat status record fetched from `/api/status` or pushed over the socket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    /// Current load-cell reading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Free-form weighing status reported alongside the reading.
    #[serde(rename = "weightStatus", skip_serializing_if = "Option::is_none")]
    pub weight_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor1: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor3: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverter: Option<bool>,
    /// Wrapping progress in percent; `100` or more means done.
    #[serde(rename = "wrapProgress", skip_serializing_if = "Option::is_none")]
    pub wrap_progress: Option<u32>,
    /// Error message reported by the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusSnapshot {
    /// Decode a snapshot from a JSON text payload.
    ///
    /// Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MalformedPayload`] when the text is not a JSON
    /// object or a known field carries the wrong type.
    pub fn from_json(text: &str) -> Result<Self, SyncError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Value of the flag backing the given lamp, if present.
    #[must_use]
    pub fn lamp(&self, lamp: Lamp) -> Option<bool> {
        match lamp {
            Lamp::Sensor1 => self.sensor1,
            Lamp::Sensor3 => self.sensor3,
            Lamp::WrapDone => self.wrap_done,
            Lamp::Robot => self.robot,
            Lamp::Inverter => self.inverter,
        }
    }

    /// Present lamp flags, in display order.
    pub fn lamps(&self) -> impl Iterator<Item = (Lamp, bool)> + '_ {
        Lamp::ALL
            .into_iter()
            .filter_map(|lamp| self.lamp(lamp).map(|on| (lamp, on)))
    }

    /// Device-reported error message, ignoring empty strings.
    #[must_use]
    pub fn device_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|msg| !msg.is_empty())
    }
}
