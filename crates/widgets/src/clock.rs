use livetemp_core::Snapshot;
use serde::Serialize;

/// The "Current Date and Time" card — the latest reading's timestamp,
/// split into a date part and a time part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockView {
    pub date: String,
    pub time: String,
}

pub fn view(snapshot: &Snapshot) -> ClockView {
    match &snapshot.latest {
        Some(reading) => ClockView {
            date: reading.timestamp.format("%Y-%m-%d").to_string(),
            time: reading.timestamp.format("%H:%M:%S").to_string(),
        },
        None => ClockView {
            date: "N/A".to_string(),
            time: "N/A".to_string(),
        },
    }
}
