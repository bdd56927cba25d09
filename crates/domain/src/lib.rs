//! # wraphmi-domain
//!
//! Pure domain model for the wrapping-machine operator panel.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **status snapshot** pushed or fetched from the device
//! - Define **commands** sent from the operator to the device
//! - Define **lamps** and their fixed color table
//! - Derive the **progress view** (bar, labels) from a single progress value
//! - Define the streaming **connection state** machine
//! - Define **log lines** shown in the operator log pane
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod command;
pub mod connection;
pub mod lamp;
pub mod log;
pub mod progress;
pub mod snapshot;
