//! Dashboard — applies status snapshots to the panel and writes the log pane.
//!
//! Both transports feed the same [`Dashboard`]; it is the only place that
//! knows how a snapshot field maps onto a widget.

use std::sync::Arc;

use wraphmi_domain::log::LogLine;
use wraphmi_domain::progress::ProgressView;
use wraphmi_domain::snapshot::StatusSnapshot;
use wraphmi_domain::time::{Timestamp, local_clock_text};

use crate::ports::Presenter;

/// Shared handle on the panel widgets.
pub struct Dashboard<P> {
    presenter: Arc<P>,
}

impl<P> Clone for Dashboard<P> {
    fn clone(&self) -> Self {
        Self {
            presenter: Arc::clone(&self.presenter),
        }
    }
}

impl<P: Presenter> Dashboard<P> {
    /// Wrap a presenter.
    pub fn new(presenter: P) -> Self {
        Self::from_shared(Arc::new(presenter))
    }

    /// Wrap a presenter that is also held elsewhere.
    pub fn from_shared(presenter: Arc<P>) -> Self {
        Self { presenter }
    }

    /// Access the underlying presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Apply a snapshot: every present field overwrites its widget, absent
    /// fields leave their widget untouched.
    ///
    /// A device-reported error is appended to the log instead of replacing a
    /// widget.
    pub fn apply_snapshot(&self, snapshot: &StatusSnapshot) {
        if let Some(weight) = snapshot.weight {
            self.presenter.show_weight(&format_weight(weight));
        }
        if let Some(status) = &snapshot.weight_status {
            self.presenter.show_weight_status(status);
        }
        for (lamp, on) in snapshot.lamps() {
            self.presenter.show_lamp(lamp, lamp.color(on));
        }
        if let Some(percent) = snapshot.wrap_progress {
            self.presenter.show_progress(&ProgressView::new(percent));
        }
        if let Some(message) = snapshot.device_error() {
            tracing::warn!(%message, "device reported an error");
            self.log_error(format!("ERROR: {message}"));
        }
    }

    /// Decode a JSON text payload and apply it.
    ///
    /// Malformed payloads are logged as errors; returns whether the payload
    /// was applied.
    pub fn apply_payload(&self, text: &str) -> bool {
        match StatusSnapshot::from_json(text) {
            Ok(snapshot) => {
                self.apply_snapshot(&snapshot);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err.detailed(), "dropping malformed status payload");
                self.log_error(format!("malformed status payload: {}", err.detailed()));
                false
            }
        }
    }

    /// Prepend an informational line to the log pane.
    pub fn log_info(&self, message: impl Into<String>) {
        self.presenter.append_log(LogLine::info(message));
    }

    /// Prepend an error line to the log pane.
    pub fn log_error(&self, message: impl Into<String>) {
        self.presenter.append_log(LogLine::error(message));
    }

    /// Update the clock widget.
    pub fn show_time(&self, time: &Timestamp) {
        self.presenter.show_clock(&local_clock_text(time));
    }
}

/// Weight text with exactly two decimals.
#[must_use]
pub fn format_weight(weight: f64) -> String {
    format!("{weight:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingPresenter};
    use wraphmi_domain::lamp::{Lamp, LampColor};
    use wraphmi_domain::log::Severity;
    use wraphmi_domain::progress::WrapPhase;

    fn dashboard() -> (Dashboard<RecordingPresenter>, Arc<RecordingPresenter>) {
        let presenter = Arc::new(RecordingPresenter::default());
        (Dashboard::from_shared(Arc::clone(&presenter)), presenter)
    }

    #[test]
    fn should_format_weight_with_two_decimals() {
        assert_eq!(format_weight(12.5), "12.50");
        assert_eq!(format_weight(0.0), "0.00");
        assert_eq!(format_weight(12.345_6), "12.35");
    }

    #[test]
    fn should_touch_nothing_for_empty_snapshot() {
        let (dashboard, presenter) = dashboard();
        dashboard.apply_snapshot(&StatusSnapshot::default());
        assert!(presenter.calls().is_empty());
    }

    #[test]
    fn should_update_weight_and_progress_only() {
        let (dashboard, presenter) = dashboard();
        assert!(dashboard.apply_payload(r#"{"weight":12.5,"wrapProgress":100}"#));

        let calls = presenter.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::Weight("12.50".to_string()));
        let Call::Progress(view) = &calls[1] else {
            panic!("expected progress call, got {:?}", calls[1]);
        };
        assert_eq!(view.bar_width, "100%");
        assert_eq!(view.phase, WrapPhase::Complete);
        assert_eq!(view.status(), "DONE");
        assert_eq!(view.message(), "complete");
        assert!(!calls.iter().any(|c| matches!(c, Call::Lamp(..))));
    }

    #[test]
    fn should_paint_only_present_lamps() {
        let (dashboard, presenter) = dashboard();
        dashboard.apply_snapshot(&StatusSnapshot {
            robot: Some(true),
            sensor3: Some(false),
            ..StatusSnapshot::default()
        });

        assert_eq!(
            presenter.calls(),
            vec![
                Call::Lamp(Lamp::Sensor3, LampColor::Gray),
                Call::Lamp(Lamp::Robot, LampColor::Blue),
            ]
        );
    }

    #[test]
    fn should_apply_each_field_independently() {
        let full = StatusSnapshot {
            weight: Some(3.0),
            weight_status: Some("OK".to_string()),
            sensor1: Some(true),
            sensor3: Some(true),
            wrap_done: Some(false),
            robot: Some(false),
            inverter: Some(true),
            wrap_progress: Some(40),
            error: None,
        };
        let (dashboard, presenter) = dashboard();
        dashboard.apply_snapshot(&full);
        let all = presenter.calls();
        assert_eq!(all.len(), 8);

        // A snapshot with a single field produces exactly the call that the
        // full snapshot produced for that field.
        let only_status = StatusSnapshot {
            weight_status: Some("OK".to_string()),
            ..StatusSnapshot::default()
        };
        presenter.clear();
        dashboard.apply_snapshot(&only_status);
        assert_eq!(presenter.calls(), vec![Call::WeightStatus("OK".to_string())]);
        assert!(all.contains(&Call::WeightStatus("OK".to_string())));
    }

    #[test]
    fn should_be_idempotent() {
        let snapshot = StatusSnapshot {
            weight: Some(1.0),
            inverter: Some(true),
            ..StatusSnapshot::default()
        };
        let (dashboard, presenter) = dashboard();
        dashboard.apply_snapshot(&snapshot);
        let first = presenter.calls();
        presenter.clear();
        dashboard.apply_snapshot(&snapshot);
        assert_eq!(presenter.calls(), first);
    }

    #[test]
    fn should_log_device_error_without_touching_widgets() {
        let (dashboard, presenter) = dashboard();
        dashboard.apply_payload(r#"{"error":"film torn"}"#);

        let logs = presenter.logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "ERROR: film torn");
        assert_eq!(logs[0].severity, Severity::Error);
        assert!(presenter.widget_calls().is_empty());
    }

    #[test]
    fn should_log_malformed_payload_as_error() {
        let (dashboard, presenter) = dashboard();
        assert!(!dashboard.apply_payload("not json"));

        let logs = presenter.logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].is_error());
        assert!(logs[0].message.starts_with("malformed status payload"));
        assert!(presenter.widget_calls().is_empty());
    }

    #[test]
    fn should_show_local_clock_text() {
        let (dashboard, presenter) = dashboard();
        dashboard.show_time(&wraphmi_domain::time::now());
        let calls = presenter.calls();
        let [Call::Clock(text)] = calls.as_slice() else {
            panic!("expected a single clock call, got {calls:?}");
        };
        assert_eq!(text.len(), 8);
    }
}
