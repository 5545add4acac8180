//! Daily Series Service Provider Interface
//!
//! Defines the data model and contracts for time-indexed meter data.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesSource;
pub use error::{Result, SeriesError};
pub use model::{reading_dates, reading_values, DailySeries, DayValue, Reading};
