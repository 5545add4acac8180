//! Daily Series Core
//!
//! Resampling of raw readings into daily series.

mod aggregate;

pub use aggregate::{AggregatePolicy, DailyAggregator};
