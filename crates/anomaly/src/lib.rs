//! Anomaly Detection Facade
//!
//! Unified re-exports for the anomaly detection module:
//! - `SeriesDetector` trait, `Detection` result and `AnomalyWindow` from SPI
//! - `OutlierConfig` and `ProlongedConfig` from API
//! - `OutlierDetector` and `ProlongedDetector` from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;
