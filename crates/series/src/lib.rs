//! Daily Series Facade
//!
//! Unified re-exports for the series module:
//! - `Reading`, `DailySeries` and the `SeriesSource` contract from SPI
//! - `DailyAggregator` and `AggregatePolicy` from Core

// Re-export everything from SPI
pub use series_spi::*;

// Re-export everything from Core
pub use series_core::*;
