//! Anomaly detection error types.

mod anomaly_error;

pub use anomaly_error::{AnomalyError, Result};
