//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// These are contract violations at the detector boundary. Insufficient data
/// and zero-variance series are not errors; detectors recover from those by
/// reporting no anomalies.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Empty series: detection requires at least one day")]
    EmptySeries,

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl AnomalyError {
    /// Convenience constructor for parameter violations.
    pub fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
