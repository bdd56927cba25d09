//! Time and timestamp helpers.

use chrono::{DateTime, Local, TimeZone, Utc};

/// UTC timestamp used for log lines.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a time of day as `HH:MM:SS` in the zone it carries.
#[must_use]
pub fn format_time_of_day<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%H:%M:%S").to_string()
}

/// Wall-clock text for the clock widget, in the host's local zone.
#[must_use]
pub fn local_clock_text(time: &Timestamp) -> String {
    format_time_of_day(&time.with_timezone(&Local))
}
