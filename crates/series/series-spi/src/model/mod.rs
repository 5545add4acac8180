//! Data model for raw readings and daily series.

mod daily_series;
mod reading;
mod utils;

pub use daily_series::{DailySeries, DayValue};
pub use reading::Reading;
pub use utils::{reading_dates, reading_values};
