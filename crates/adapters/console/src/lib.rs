//! # wraphmi-adapter-console
//!
//! Terminal rendition of the operator panel.
//!
//! ## Widgets
//!
//! | Widget | Terminal form |
//! |--------|---------------|
//! | Weight + status | `weight 12.50 (OK)` |
//! | Lamps | one colored dot per lamp |
//! | Progress | `wrap 75% ACTIVE (in progress)` |
//! | Clock | prefix of the status row |
//! | Log pane | one line per entry, red for errors |
//!
//! Widget changes re-render a single status row; log lines are written as
//! they arrive. The full state is kept in a [`Board`] that tests can inspect.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `wraphmi-app` and `wraphmi-domain`.

mod board;
mod config;
mod presenter;

pub use board::Board;
pub use config::ConsoleConfig;
pub use presenter::ConsolePresenter;
