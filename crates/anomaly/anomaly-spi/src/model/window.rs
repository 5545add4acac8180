//! Anomaly window type.

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A maximal run of consecutive anomalous days, inclusive on both ends.
///
/// Lists of windows are chronological and non-overlapping; two windows
/// separated by zero gap days are merged by the detector that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyWindow {
    /// First anomalous day.
    pub start: NaiveDate,
    /// Last anomalous day (inclusive).
    pub end: NaiveDate,
}

impl AnomalyWindow {
    /// Create a window. `start` must not be after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "window start after end");
        Self { start, end }
    }

    /// A window covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Whether the window covers the given day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate over every calendar day in the window, inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// The day immediately after the window, for exclusive-end consumers.
    pub fn day_after_end(&self) -> NaiveDate {
        self.end
            .checked_add_days(Days::new(1))
            .expect("date overflow past chrono range")
    }
}

impl fmt::Display for AnomalyWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{} to {}", self.start, self.end)
        }
    }
}
