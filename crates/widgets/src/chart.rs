use livetemp_core::Snapshot;
use livetemp_trend::{fit, TrendError};
use serde::Serialize;

/// Chart title when the window holds at least one reading.
pub const CHART_TITLE: &str = "Temperature Readings with Regression Line";
/// Placeholder title for the empty window.
pub const EMPTY_CHART_TITLE: &str = "No Data Available";

/// The "Chart with Current Trend" card — a scatter of the window plus an
/// optional least-squares overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub title: String,
    /// One point per window entry, insertion order.
    pub points: Vec<ChartPoint>,
    /// `None` when fewer than two points are available.
    pub trend: Option<TrendOverlay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: String,
    pub temp_f: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendOverlay {
    /// Fitted value per window index, same length as `points`.
    pub line: Vec<f64>,
    pub annotation: Annotation,
}

/// The fit-formula label, anchored at the window midpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub index: usize,
    pub value: f64,
    pub text: String,
}

pub fn view(snapshot: &Snapshot) -> ChartView {
    if snapshot.readings.is_empty() {
        return ChartView {
            title: EMPTY_CHART_TITLE.to_string(),
            points: Vec::new(),
            trend: None,
        };
    }

    let points = snapshot
        .readings
        .iter()
        .map(|reading| ChartPoint {
            timestamp: reading.timestamp_string(),
            temp_f: reading.temp_f,
        })
        .collect();

    let trend = match fit(&snapshot.values()) {
        Ok(fit) => {
            let annotation = Annotation {
                index: fit.label_index(),
                value: fit.label_value(),
                text: fit.label_text(),
            };
            Some(TrendOverlay {
                line: fit.fitted,
                annotation,
            })
        }
        Err(TrendError::InsufficientData(_)) => None,
    };

    ChartView {
        title: CHART_TITLE.to_string(),
        points,
        trend,
    }
}
