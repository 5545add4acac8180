//! Series detector trait definition.

use series_spi::DailySeries;

use crate::error::Result;
use crate::model::Detection;

/// A detector that runs one stateless pass over a daily usage series.
///
/// Implementations are deterministic: the same series and configuration
/// always produce the same detection.
pub trait SeriesDetector: Send + Sync {
    /// What a single finding looks like (a date, a window, ...).
    type Finding;

    /// Detector name, for diagnostics.
    fn name(&self) -> &str;

    /// Run detection over the series.
    ///
    /// An empty series is a contract violation; a series too short or too
    /// flat to score yields `Detection::NoAnomalies`.
    fn detect(&self, series: &DailySeries) -> Result<Detection<Vec<Self::Finding>>>;
}
