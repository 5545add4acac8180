//! Raw sample types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single raw sample from a meter or weather feed.
///
/// Granularity is arbitrary: half-hourly smart-meter reads, hourly
/// temperature observations, or anything else with a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Sample timestamp.
    pub timestamp: NaiveDateTime,
    /// Measured value (kWh for usage, degrees Celsius for temperature).
    pub value: f64,
}

impl Reading {
    /// Create a new Reading.
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// The calendar day this sample falls on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}
