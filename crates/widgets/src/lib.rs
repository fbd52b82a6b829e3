//! Per-widget view models built from a published snapshot.
//!
//! Each widget is a pure function of the snapshot; rendering (layout,
//! styling, the page itself) lives in `livetemp-server`'s static assets.

pub mod chart;
pub mod clock;
pub mod table;
pub mod value_box;

pub use chart::{ChartView, CHART_TITLE, EMPTY_CHART_TITLE};
pub use clock::ClockView;
pub use table::TableView;
pub use value_box::TempView;

use livetemp_core::Snapshot;
use serde::Serialize;

/// Everything the dashboard page needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Location label for the page header.
    pub location: String,
    /// Poll cadence hint for the page, in seconds.
    pub interval_secs: u64,
    pub temperature: TempView,
    pub clock: ClockView,
    pub readings: TableView,
    pub chart: ChartView,
}

/// Assemble all widget views from one snapshot.
pub fn dashboard_view(snapshot: &Snapshot, location: &str, interval_secs: u64) -> DashboardView {
    DashboardView {
        location: location.to_string(),
        interval_secs,
        temperature: value_box::view(snapshot),
        clock: clock::view(snapshot),
        readings: table::view(snapshot),
        chart: chart::view(snapshot),
    }
}
