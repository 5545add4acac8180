//! Series error types.

mod series_error;

pub use series_error::{Result, SeriesError};
