//! Utility functions for working with raw readings.

use chrono::NaiveDate;

use super::Reading;

/// Extract sample values from readings.
pub fn reading_values(readings: &[Reading]) -> Vec<f64> {
    readings.iter().map(|r| r.value).collect()
}

/// Extract the calendar day of each reading.
pub fn reading_dates(readings: &[Reading]) -> Vec<NaiveDate> {
    readings.iter().map(|r| r.date()).collect()
}
