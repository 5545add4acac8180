//! Weather correlation error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Weather correlation errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Empty temperature series: correlation requires at least one day")]
    EmptySeries,

    /// An anomaly date with no matching temperature reading. Surfaced as a
    /// hard failure: silently skipping the date would let the narrative make
    /// claims the data cannot back.
    #[error("Missing temperature sample for {date}")]
    MissingSample { date: NaiveDate },
}

/// Result type for weather correlation operations.
pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_display() {
        assert_eq!(
            WeatherError::EmptySeries.to_string(),
            "Empty temperature series: correlation requires at least one day"
        );
    }

    #[test]
    fn test_missing_sample_display() {
        let error = WeatherError::MissingSample {
            date: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Missing temperature sample for 2024-08-15"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WeatherError>();
    }
}
