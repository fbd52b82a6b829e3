//! The live data feed: sample sources, the rolling window, and the
//! scheduler task that ties them together.
//!
//! One writer, many readers.  `spawn_feed` owns the window; per tick it
//! samples once, appends on success, and publishes an immutable
//! [`Snapshot`] on a watch channel.  Every consumer of a given tick
//! observes the same snapshot — renders never re-trigger sampling.

pub mod remote;
pub mod source;
pub mod synthetic;
pub mod window;

pub use remote::RemoteSource;
pub use source::{FetchError, Sampler};
pub use synthetic::SyntheticSource;
pub use window::RollingWindow;

use livetemp_core::{Reading, Snapshot};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

/// Spawn the background feed task.
///
/// `interval_rx` carries the tick period and may be updated at runtime
/// (config live-reload); capacity is fixed for the life of the feed.
/// The task stops when the last snapshot receiver is dropped.
pub fn spawn_feed(
    sampler: Sampler,
    capacity: usize,
    mut interval_rx: watch::Receiver<Duration>,
) -> watch::Receiver<Arc<Snapshot>> {
    let (tx, rx) = watch::channel(Arc::new(Snapshot::empty()));
    let period = *interval_rx.borrow();

    tokio::spawn(async move {
        let mut window = RollingWindow::new(capacity);
        let mut ticker = new_ticker(period);
        let mut interval_open = true;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Sequential await: readings are appended strictly in
                    // tick order, bounded by the sampler's own timeout.
                    let result = sampler.produce().await;
                    let snapshot = Arc::new(apply_tick(&mut window, result));
                    if tx.send(snapshot).is_err() {
                        break; // all receivers dropped
                    }
                }
                changed = interval_rx.changed(), if interval_open => {
                    match changed {
                        Ok(()) => {
                            let period = *interval_rx.borrow_and_update();
                            info!("Refresh interval is now {period:?}");
                            ticker = new_ticker(period);
                        }
                        // Sender gone; keep the current cadence.
                        Err(_) => interval_open = false,
                    }
                }
            }
        }
    });

    rx
}

fn new_ticker(period: Duration) -> time::Interval {
    let mut ticker = time::interval(period);
    // Skip, never burst: a stalled fetch costs at most one tick and late
    // ticks are dropped rather than applied out of order.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Apply one tick's sample result to the window and build the snapshot
/// consumers will observe for that tick.
///
/// On failure the window is untouched and the snapshot carries
/// `latest: None` — the absent state renders as "N/A".
fn apply_tick(window: &mut RollingWindow, result: Result<Reading, FetchError>) -> Snapshot {
    let latest = match result {
        Ok(reading) => {
            window.append(reading.clone());
            Some(reading)
        }
        Err(e) => {
            warn!("sample unavailable this tick: {e}");
            None
        }
    };

    Snapshot {
        readings: window.snapshot(),
        latest,
    }
}
