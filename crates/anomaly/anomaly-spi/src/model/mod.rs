//! Anomaly detection result models.

mod detection;
mod window;

pub use detection::{DailyOutliers, Detection, ProlongedAnomalies};
pub use window::AnomalyWindow;
