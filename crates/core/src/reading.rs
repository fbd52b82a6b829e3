use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp format used everywhere a reading is displayed or parsed.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single temperature measurement.
///
/// Immutable once created. Produced by a sample source on each tick and
/// owned by the rolling window afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in degrees Fahrenheit.
    pub temp_f: f64,
    /// Local time the reading was taken, truncated to whole seconds.
    pub timestamp: DateTime<Local>,
}

impl Reading {
    /// Create a reading stamped with the current local time.
    pub fn now(temp_f: f64) -> Self {
        let now = Local::now();
        Self {
            temp_f,
            timestamp: now.with_nanosecond(0).unwrap_or(now),
        }
    }

    /// Create a reading with an explicit timestamp (remote payloads, tests).
    pub fn at(temp_f: f64, timestamp: DateTime<Local>) -> Self {
        Self { temp_f, timestamp }
    }

    /// Timestamp formatted as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// An immutable export of the rolling window at one tick.
///
/// Published atomically by the feed task; every widget rendering a given
/// tick observes the same snapshot. `latest` is `None` when the tick's
/// sample could not be produced (remote fetch failure) — the window itself
/// is untouched on such ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Window contents in insertion order, oldest first.
    pub readings: Vec<Reading>,
    /// The reading appended on this tick, if the tick produced one.
    pub latest: Option<Reading>,
}

impl Snapshot {
    /// Snapshot of an empty window, used before the first tick fires.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Temperatures in window order, the series the trend is fit over.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.temp_f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_truncates_to_seconds() {
        let reading = Reading::now(41.0);
        assert_eq!(reading.timestamp.nanosecond(), 0);
    }

    #[test]
    fn timestamp_string_is_second_precision() {
        let ts = "2026-08-06 12:30:05";
        let naive = chrono::NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap();
        let local = naive.and_local_timezone(Local).single().unwrap();
        assert_eq!(Reading::at(33.8, local).timestamp_string(), ts);
    }

    #[test]
    fn snapshot_values_follow_window_order() {
        let snap = Snapshot {
            readings: vec![Reading::now(32.0), Reading::now(33.0)],
            latest: None,
        };
        assert_eq!(snap.values(), vec![32.0, 33.0]);
    }
}
