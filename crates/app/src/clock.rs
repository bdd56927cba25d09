//! Wall-clock ticker, independent of the device link.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use wraphmi_domain::time::now;

use crate::dashboard::Dashboard;
use crate::ports::Presenter;

/// Default clock refresh period.
pub const DEFAULT_CLOCK_INTERVAL: Duration = Duration::from_secs(1);

/// Spawn a task that refreshes the clock widget every `period`.
///
/// The first refresh happens immediately.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn spawn_clock<P: Presenter>(dashboard: Dashboard<P>, period: Duration) -> JoinHandle<()> {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::spawn(async move {
        loop {
            ticker.tick().await;
            dashboard.show_time(&now());
        }
    })
}
