//! # wraphmi-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `Presenter` — the panel widgets (weight, lamps, progress, clock, log)
//!   - `DeviceApi` — polling transport (fetch status, post command)
//!   - `StreamConnector` — streaming transport (persistent socket)
//! - Define the **use-cases**:
//!   - `Dashboard` — apply a status snapshot to the widgets, write log lines
//!   - `PollClient` — fixed-interval polling plus command posting
//!   - `StreamClient` — push updates, inline commands, fixed-delay reconnect
//!   - `clock` — independent wall-clock ticker
//!
//! ## Dependency rule
//! Depends on `wraphmi-domain` only (plus `tokio` for tasks, timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod dashboard;
pub mod poll_client;
pub mod ports;
pub mod stream_client;

#[cfg(test)]
pub(crate) mod testing;
