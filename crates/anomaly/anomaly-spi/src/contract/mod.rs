//! Contracts for anomaly detectors.

mod series_detector;

pub use series_detector::SeriesDetector;
