//! # wraphmi-adapter-http-reqwest
//!
//! Polling transport — talks to the device's embedded HTTP server.
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Success |
//! |--------|------|------|---------|
//! | `GET` | `/api/status` | — | JSON status snapshot |
//! | `POST` | `/api/hmi` | `{"type": …, "data": …}` | any 2xx, body ignored |
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `wraphmi-app` and `wraphmi-domain`.

mod client;
mod config;
mod error;

pub use client::HttpDeviceApi;
pub use config::HttpConfig;
pub use error::HttpError;
