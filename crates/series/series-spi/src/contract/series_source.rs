//! Series source trait definition.

use crate::error::Result;
use crate::model::Reading;

/// Trait for collaborators that supply raw readings.
///
/// The engine itself never does I/O; loading smart-meter exports or weather
/// feeds is the embedding application's responsibility. Implementations only
/// have to return samples in ascending time order.
pub trait SeriesSource: Send + Sync {
    /// Source name, for diagnostics.
    fn name(&self) -> &str;

    /// Fetch all available readings, ascending by timestamp.
    fn readings(&self) -> Result<Vec<Reading>>;
}
