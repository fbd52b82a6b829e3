pub mod error;
pub mod reading;
pub mod units;

pub use error::{DashError, Result};
pub use reading::{Reading, Snapshot, TIMESTAMP_FORMAT};
