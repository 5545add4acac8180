//! Anomaly Detection API
//!
//! Configuration types for anomaly detection. Thresholds live here as named
//! fields with documented defaults rather than constants buried in the
//! detectors.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    AnomalyError, AnomalyWindow, DailyOutliers, Detection, ProlongedAnomalies, Result,
    SeriesDetector,
};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Single-day outlier detector configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Z-score above which a day is flagged (default: 2.0).
    ///
    /// The test is one-sided: only unusually *high* usage is flagged.
    pub zscore_threshold: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            zscore_threshold: 2.0,
        }
    }
}

impl OutlierConfig {
    pub fn new(zscore_threshold: f64) -> Self {
        Self { zscore_threshold }
    }

    /// Check the configuration for contract violations.
    pub fn validate(&self) -> Result<()> {
        if !self.zscore_threshold.is_finite() {
            return Err(AnomalyError::invalid_parameter(
                "zscore_threshold",
                "must be finite",
            ));
        }
        if self.zscore_threshold <= 0.0 {
            return Err(AnomalyError::invalid_parameter(
                "zscore_threshold",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Prolonged anomaly detector configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProlongedConfig {
    /// Minimum run length, in days, for a prolonged anomaly (default: 3).
    pub min_consecutive_days: usize,
    /// Rolling-mean z-score threshold (default: 1.5).
    ///
    /// Intentionally lower than the single-day threshold: a sustained
    /// moderate elevation matters as much as a single extreme day.
    pub zscore_threshold: f64,
}

impl Default for ProlongedConfig {
    fn default() -> Self {
        Self {
            min_consecutive_days: 3,
            zscore_threshold: 1.5,
        }
    }
}

impl ProlongedConfig {
    pub fn new(min_consecutive_days: usize, zscore_threshold: f64) -> Self {
        Self {
            min_consecutive_days,
            zscore_threshold,
        }
    }

    /// Check the configuration for contract violations.
    pub fn validate(&self) -> Result<()> {
        if self.min_consecutive_days == 0 {
            return Err(AnomalyError::invalid_parameter(
                "min_consecutive_days",
                "must be at least 1",
            ));
        }
        if !self.zscore_threshold.is_finite() {
            return Err(AnomalyError::invalid_parameter(
                "zscore_threshold",
                "must be finite",
            ));
        }
        if self.zscore_threshold <= 0.0 {
            return Err(AnomalyError::invalid_parameter(
                "zscore_threshold",
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlier_config_default() {
        let config = OutlierConfig::default();
        assert_eq!(config.zscore_threshold, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_outlier_config_rejects_non_positive_threshold() {
        assert!(OutlierConfig::new(0.0).validate().is_err());
        assert!(OutlierConfig::new(-1.0).validate().is_err());
    }

    #[test]
    fn test_outlier_config_rejects_non_finite_threshold() {
        assert!(OutlierConfig::new(f64::NAN).validate().is_err());
        assert!(OutlierConfig::new(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_prolonged_config_default() {
        let config = ProlongedConfig::default();
        assert_eq!(config.min_consecutive_days, 3);
        assert_eq!(config.zscore_threshold, 1.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_prolonged_config_rejects_zero_days() {
        let config = ProlongedConfig::new(0, 1.5);
        assert!(matches!(
            config.validate().unwrap_err(),
            AnomalyError::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_prolonged_config_rejects_bad_threshold() {
        assert!(ProlongedConfig::new(3, f64::NAN).validate().is_err());
        assert!(ProlongedConfig::new(3, -0.5).validate().is_err());
    }
}
