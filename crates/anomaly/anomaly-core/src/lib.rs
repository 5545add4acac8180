//! Anomaly Detection Core
//!
//! Detector implementations: single-day outliers and prolonged
//! multi-day anomalies over a daily usage series.

mod detectors;
mod zscore;

pub use detectors::{OutlierDetector, ProlongedDetector};
pub use zscore::population_zscores;
