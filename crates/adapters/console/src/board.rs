//! In-memory state of every panel widget.

use std::collections::VecDeque;
use std::fmt::Write as _;

use crossterm::style::{Color, Stylize as _};
use wraphmi_domain::lamp::{Lamp, LampColor};
use wraphmi_domain::log::LogLine;
use wraphmi_domain::progress::ProgressView;

const PLACEHOLDER: &str = "--";

/// Current content of the operator panel.
///
/// Widgets start empty (lamps gray) and only change when the presenter is
/// told to. The log is newest first and bounded to `log_capacity` lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub weight: Option<String>,
    pub weight_status: Option<String>,
    pub progress: Option<ProgressView>,
    pub clock: Option<String>,
    /// Set by the first error line and never cleared.
    pub log_tinted: bool,
    lamps: [(Lamp, LampColor); 5],
    log: VecDeque<LogLine>,
    log_capacity: usize,
}

impl Board {
    #[must_use]
    pub fn new(log_capacity: usize) -> Self {
        Self {
            weight: None,
            weight_status: None,
            progress: None,
            clock: None,
            log_tinted: false,
            lamps: Lamp::ALL.map(|lamp| (lamp, LampColor::Gray)),
            log: VecDeque::with_capacity(log_capacity),
            log_capacity: log_capacity.max(1),
        }
    }

    #[must_use]
    pub fn lamp(&self, lamp: Lamp) -> LampColor {
        self.lamps
            .iter()
            .find(|(candidate, _)| *candidate == lamp)
            .map_or(LampColor::Gray, |(_, color)| *color)
    }

    /// Returns `true` when the color changed.
    pub fn set_lamp(&mut self, lamp: Lamp, color: LampColor) -> bool {
        let Some(slot) = self.lamps.iter_mut().find(|(candidate, _)| *candidate == lamp) else {
            return false;
        };
        let changed = slot.1 != color;
        slot.1 = color;
        changed
    }

    /// Log lines, newest first.
    pub fn log(&self) -> impl Iterator<Item = &LogLine> {
        self.log.iter()
    }

    #[must_use]
    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn push_log(&mut self, line: LogLine) {
        if line.is_error() {
            self.log_tinted = true;
        }
        self.log.push_front(line);
        self.log.truncate(self.log_capacity);
    }

    /// Single-row rendition of the widgets.
    #[must_use]
    pub fn status_line(&self, color: bool) -> String {
        let mut out = String::new();
        if let Some(clock) = &self.clock {
            let _ = write!(out, "[{clock}] ");
        }
        let _ = write!(
            out,
            "weight {} ({})",
            self.weight.as_deref().unwrap_or(PLACEHOLDER),
            self.weight_status.as_deref().unwrap_or(PLACEHOLDER),
        );
        out.push_str(" |");
        for (lamp, lamp_color) in &self.lamps {
            let _ = write!(out, " {lamp} {}", dot(*lamp_color, color));
        }
        out.push_str(" | ");
        match &self.progress {
            Some(progress) => {
                let _ = write!(
                    out,
                    "wrap {} {} ({})",
                    progress.text,
                    progress.status(),
                    progress.message()
                );
            }
            None => {
                let _ = write!(out, "wrap {PLACEHOLDER}");
            }
        }
        out
    }
}

fn dot(lamp_color: LampColor, color: bool) -> String {
    if color {
        let (r, g, b) = lamp_color.rgb();
        "●".with(Color::Rgb { r, g, b }).to_string()
    } else if lamp_color == LampColor::Gray {
        "○".to_string()
    } else {
        "●".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::style::{Color, Stylize as _};

    use super::*;

    #[test]
    fn should_start_with_gray_lamps_and_empty_widgets() {
        let board = Board::new(10);

        assert!(Lamp::ALL.iter().all(|l| board.lamp(*l) == LampColor::Gray));
        assert!(board.weight.is_none());
        assert!(board.progress.is_none());
        assert_eq!(board.log_len(), 0);
        assert!(!board.log_tinted);
    }

    #[test]
    fn should_report_lamp_changes_only_once() {
        let mut board = Board::new(10);

        assert!(board.set_lamp(Lamp::Robot, LampColor::Blue));
        assert!(!board.set_lamp(Lamp::Robot, LampColor::Blue));
        assert_eq!(board.lamp(Lamp::Robot), LampColor::Blue);
        assert_eq!(board.lamp(Lamp::Inverter), LampColor::Gray);
    }

    #[test]
    fn should_keep_newest_log_line_first_and_bounded() {
        let mut board = Board::new(2);

        board.push_log(LogLine::info("one"));
        board.push_log(LogLine::info("two"));
        board.push_log(LogLine::info("three"));

        let messages: Vec<_> = board.log().map(|l| l.message.as_str()).collect();
        assert_eq!(messages, vec!["three", "two"]);
    }

    #[test]
    fn should_keep_tint_after_error_scrolls_out() {
        let mut board = Board::new(1);

        board.push_log(LogLine::error("HTTP 500 sending start"));
        board.push_log(LogLine::info("→ Sent: stop"));

        assert!(board.log_tinted);
        assert!(board.log().all(|l| !l.is_error()));
    }

    #[test]
    fn should_render_plain_status_line() {
        let mut board = Board::new(10);
        board.weight = Some("12.50".to_string());
        board.weight_status = Some("OK".to_string());
        board.set_lamp(Lamp::Sensor1, LampColor::Green);
        board.progress = Some(ProgressView::new(100));
        board.clock = Some("08:15:00".to_string());

        assert_eq!(
            board.status_line(false),
            "[08:15:00] weight 12.50 (OK) | sensor1 ● sensor3 ○ wrap_done ○ robot ○ inverter ○ \
             | wrap 100% DONE (complete)"
        );
    }

    #[test]
    fn should_render_placeholders_before_first_status() {
        let board = Board::new(10);
        let line = board.status_line(false);

        assert!(line.starts_with("weight -- (--)"));
        assert!(line.ends_with("wrap --"));
    }

    #[test]
    fn should_paint_lamps_with_truecolor_escapes() {
        let mut board = Board::new(10);
        board.set_lamp(Lamp::Robot, LampColor::Blue);

        let line = board.status_line(true);

        let blue = "●".with(Color::Rgb { r: 0x29, g: 0x62, b: 0xff });
        assert!(line.contains(&format!("robot {blue}")));
    }
}
