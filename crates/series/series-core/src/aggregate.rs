//! Resampling raw readings to one value per calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use series_spi::{DailySeries, DayValue, Reading, Result};
use tracing::debug;

/// How samples falling on the same calendar day are combined.
///
/// Usage readings are summed (total consumption for the day); temperature
/// readings are averaged. The two are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregatePolicy {
    /// Daily total: sum of all samples on the day.
    Sum,
    /// Daily mean: average of all samples on the day.
    Mean,
}

/// Resamples raw readings of arbitrary granularity into a [`DailySeries`].
///
/// Days with no samples are omitted from the output rather than filled
/// with zero or interpolated; downstream consumers must tolerate a
/// non-uniform date index.
#[derive(Debug, Clone)]
pub struct DailyAggregator {
    policy: AggregatePolicy,
}

impl DailyAggregator {
    /// Create an aggregator with the given per-day policy.
    pub fn new(policy: AggregatePolicy) -> Self {
        Self { policy }
    }

    /// Aggregator for usage readings (daily totals).
    pub fn usage() -> Self {
        Self::new(AggregatePolicy::Sum)
    }

    /// Aggregator for temperature readings (daily means).
    pub fn temperature() -> Self {
        Self::new(AggregatePolicy::Mean)
    }

    /// The configured policy.
    pub fn policy(&self) -> AggregatePolicy {
        self.policy
    }

    /// Resample readings into a daily series.
    pub fn aggregate(&self, readings: &[Reading]) -> Result<DailySeries> {
        let mut buckets: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
        for reading in readings {
            let bucket = buckets.entry(reading.date()).or_insert((0.0, 0));
            bucket.0 += reading.value;
            bucket.1 += 1;
        }

        let points: Vec<DayValue> = buckets
            .into_iter()
            .map(|(date, (sum, count))| {
                let value = match self.policy {
                    AggregatePolicy::Sum => sum,
                    AggregatePolicy::Mean => sum / count as f64,
                };
                DayValue::new(date, value)
            })
            .collect();

        debug!(
            samples = readings.len(),
            days = points.len(),
            policy = ?self.policy,
            "resampled readings to daily series"
        );

        DailySeries::new(points)
    }
}
