//! Presenter port — the widgets of the operator panel.

use std::sync::Arc;

use wraphmi_domain::lamp::{Lamp, LampColor};
use wraphmi_domain::log::LogLine;
use wraphmi_domain::progress::ProgressView;

/// Rendering surface for the panel widgets.
///
/// Every method overwrites exactly one widget (or prepends one log line) and
/// must not block. Implementations use interior mutability: the presenter is
/// shared between the status task, the clock task and command senders.
pub trait Presenter: Send + Sync + 'static {
    /// Weight display, already formatted (`"12.50"`).
    fn show_weight(&self, text: &str);

    /// Weighing status label.
    fn show_weight_status(&self, text: &str);

    /// Paint one lamp.
    fn show_lamp(&self, lamp: Lamp, color: LampColor);

    /// Progress bar, percentage text and the two wrap labels.
    fn show_progress(&self, progress: &ProgressView);

    /// Wall-clock display.
    fn show_clock(&self, text: &str);

    /// Prepend a line to the log pane.
    fn append_log(&self, line: LogLine);
}

impl<T: Presenter> Presenter for Arc<T> {
    fn show_weight(&self, text: &str) {
        (**self).show_weight(text);
    }

    fn show_weight_status(&self, text: &str) {
        (**self).show_weight_status(text);
    }

    fn show_lamp(&self, lamp: Lamp, color: LampColor) {
        (**self).show_lamp(lamp, color);
    }

    fn show_progress(&self, progress: &ProgressView) {
        (**self).show_progress(progress);
    }

    fn show_clock(&self, text: &str) {
        (**self).show_clock(text);
    }

    fn append_log(&self, line: LogLine) {
        (**self).append_log(line);
    }
}
