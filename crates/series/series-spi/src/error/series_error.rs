//! Daily series error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or loading a daily series.
#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Dates out of order: {prev} followed by {next}")]
    UnsortedDates { prev: NaiveDate, next: NaiveDate },

    #[error("Duplicate date: {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("Source error: {0}")]
    SourceError(String),
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, day).unwrap()
    }

    #[test]
    fn test_unsorted_dates_display() {
        let error = SeriesError::UnsortedDates {
            prev: d(5),
            next: d(3),
        };
        assert_eq!(
            error.to_string(),
            "Dates out of order: 2024-08-05 followed by 2024-08-03"
        );
    }

    #[test]
    fn test_duplicate_date_display() {
        let error = SeriesError::DuplicateDate { date: d(5) };
        assert_eq!(error.to_string(), "Duplicate date: 2024-08-05");
    }

    #[test]
    fn test_source_error_display() {
        let error = SeriesError::SourceError("file truncated".to_string());
        assert_eq!(error.to_string(), "Source error: file truncated");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeriesError>();
    }
}
