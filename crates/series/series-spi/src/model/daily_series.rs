//! Daily-indexed series types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};

/// One calendar day's aggregated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayValue {
    /// Calendar day.
    pub date: NaiveDate,
    /// Aggregated value for that day.
    pub value: f64,
}

impl DayValue {
    /// Create a new DayValue.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// An ordered daily series: one entry per calendar day, dates strictly
/// increasing, no duplicates. Gaps are allowed: days with no samples are
/// simply absent, never zero-filled.
///
/// Immutable once built; validation happens at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DayValue>", into = "Vec<DayValue>")]
pub struct DailySeries {
    points: Vec<DayValue>,
}

impl DailySeries {
    /// Build a series from day values, validating strict date ordering.
    pub fn new(points: Vec<DayValue>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(SeriesError::DuplicateDate { date: pair[0].date });
            }
            if pair[1].date < pair[0].date {
                return Err(SeriesError::UnsortedDates {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }
        }
        Ok(Self { points })
    }

    /// Build a series from (date, value) pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, value)| DayValue::new(date, value))
                .collect(),
        )
    }

    /// Number of days in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no days at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The underlying day values, in date order.
    pub fn points(&self) -> &[DayValue] {
        &self.points
    }

    /// Iterate over day values in date order.
    pub fn iter(&self) -> impl Iterator<Item = &DayValue> {
        self.points.iter()
    }

    /// All dates, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// All values, in date order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Look up the value for one calendar day, if present.
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].value)
    }

    /// Date of the first entry.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Date of the last entry.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Mean of all values, or `None` for an empty series.
    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f64 = self.points.iter().map(|p| p.value).sum();
        Some(sum / self.points.len() as f64)
    }
}

impl TryFrom<Vec<DayValue>> for DailySeries {
    type Error = SeriesError;

    fn try_from(points: Vec<DayValue>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<DailySeries> for Vec<DayValue> {
    fn from(series: DailySeries) -> Self {
        series.points
    }
}
