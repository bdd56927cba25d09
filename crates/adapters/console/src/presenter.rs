//! [`Presenter`] implementation writing to a terminal.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crossterm::style::Stylize as _;
use wraphmi_app::ports::Presenter;
use wraphmi_domain::lamp::{Lamp, LampColor};
use wraphmi_domain::log::LogLine;
use wraphmi_domain::progress::ProgressView;

use crate::board::Board;
use crate::config::ConsoleConfig;

/// Renders the panel on any [`Write`] sink, stdout by default.
pub struct ConsolePresenter {
    board: Mutex<Board>,
    out: Mutex<Box<dyn Write + Send>>,
    color: bool,
}

impl std::fmt::Debug for ConsolePresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsolePresenter")
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl ConsolePresenter {
    #[must_use]
    pub fn new(config: &ConsoleConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }

    #[must_use]
    pub fn with_writer(config: &ConsoleConfig, writer: impl Write + Send + 'static) -> Self {
        Self {
            board: Mutex::new(Board::new(config.log_capacity)),
            out: Mutex::new(Box::new(writer)),
            color: config.color,
        }
    }

    /// Copy of the current widget state.
    #[must_use]
    pub fn board(&self) -> Board {
        self.lock_board().clone()
    }

    fn lock_board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            tracing::debug!(%err, "console write failed");
        }
    }

    /// Apply `update` and re-render the status row if it changed anything.
    ///
    /// Output is written while the board is locked so the terminal shows
    /// changes in the order the board received them.
    fn update(&self, update: impl FnOnce(&mut Board) -> bool) {
        let mut board = self.lock_board();
        if update(&mut board) {
            self.write_line(&board.status_line(self.color));
        }
    }
}

fn replace<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        return false;
    }
    *slot = Some(value);
    true
}

impl Presenter for ConsolePresenter {
    fn show_weight(&self, text: &str) {
        self.update(|board| replace(&mut board.weight, text.to_string()));
    }

    fn show_weight_status(&self, text: &str) {
        self.update(|board| replace(&mut board.weight_status, text.to_string()));
    }

    fn show_lamp(&self, lamp: Lamp, color: LampColor) {
        self.update(|board| board.set_lamp(lamp, color));
    }

    fn show_progress(&self, progress: &ProgressView) {
        self.update(|board| replace(&mut board.progress, progress.clone()));
    }

    fn show_clock(&self, text: &str) {
        self.lock_board().clock = Some(text.to_string());
    }

    fn append_log(&self, line: LogLine) {
        let rendered = if self.color && line.is_error() {
            line.render().red().to_string()
        } else {
            line.render()
        };
        let mut board = self.lock_board();
        board.push_log(line);
        self.write_line(&rendered);
    }
}
