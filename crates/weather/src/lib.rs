//! # weather
//!
//! Correlates detected usage anomalies against a daily temperature series.
//! Produces descriptive statistics and the rendered strings the narrative
//! layer embeds verbatim.

mod correlate;
mod error;

pub use correlate::{correlate, WeatherSummary};
pub use error::{Result, WeatherError};
