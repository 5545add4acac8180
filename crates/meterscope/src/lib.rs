//! # meterscope
//!
//! Smart-meter energy-usage anomaly analysis: resamples raw readings to
//! daily totals, flags single-day and prolonged anomalies, correlates them
//! with weather, and renders a narrative plus chart descriptions for an
//! embedding application (typically a conversational assistant).
//!
//! One call to [`run_analysis`] is one complete, stateless pass:
//!
//! ```rust,ignore
//! use meterscope::{run_analysis, AnalysisConfig};
//!
//! let report = run_analysis(&usage_readings, &temperature_readings, &AnalysisConfig::default())?;
//! println!("{}", report.narrative);
//! ```

mod analysis;

pub use analysis::{run_analysis, AnalysisConfig, AnalysisError, AnalysisReport};

// Re-export the component crates for direct use
pub use anomaly;
pub use report;
pub use series;
pub use weather;
