use livetemp_core::Snapshot;
use serde::Serialize;

/// The "Most Recent Readings" table — one row per window entry,
/// chronological order (oldest first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub temp: String,
    pub timestamp: String,
}

pub fn view(snapshot: &Snapshot) -> TableView {
    let rows = snapshot
        .readings
        .iter()
        .map(|reading| TableRow {
            temp: format!("{:.1}", reading.temp_f),
            timestamp: reading.timestamp_string(),
        })
        .collect();
    TableView { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livetemp_core::Reading;

    #[test]
    fn one_row_per_window_entry_in_order() {
        let snapshot = Snapshot {
            readings: vec![Reading::now(33.0), Reading::now(35.5), Reading::now(34.2)],
            latest: Some(Reading::now(34.2)),
        };
        let table = view(&snapshot);
        let temps: Vec<&str> = table.rows.iter().map(|r| r.temp.as_str()).collect();
        assert_eq!(temps, vec!["33.0", "35.5", "34.2"]);
    }

    #[test]
    fn empty_window_has_no_rows() {
        assert!(view(&Snapshot::empty()).rows.is_empty());
    }
}
