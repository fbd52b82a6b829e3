use livetemp_core::Snapshot;
use serde::Serialize;

/// The "Current Temperature" value box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TempView {
    /// `"41.0 F"`, or `"N/A"` when the tick produced no reading.
    pub label: String,
}

pub fn view(snapshot: &Snapshot) -> TempView {
    let label = match &snapshot.latest {
        Some(reading) => format!("{:.1} F", reading.temp_f),
        None => "N/A".to_string(),
    };
    TempView { label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livetemp_core::Reading;

    #[test]
    fn formats_latest_to_one_decimal() {
        let snapshot = Snapshot {
            readings: vec![Reading::now(38.3)],
            latest: Some(Reading::now(38.3)),
        };
        assert_eq!(view(&snapshot).label, "38.3 F");
    }

    #[test]
    fn absent_reading_renders_na() {
        let snapshot = Snapshot {
            readings: vec![Reading::now(38.3)],
            latest: None,
        };
        assert_eq!(view(&snapshot).label, "N/A");
    }
}
