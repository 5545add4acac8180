//! # report
//!
//! Renders detection and correlation results for external consumers: a
//! natural-language narrative block for the conversational layer, and
//! parameterized chart descriptions for a rendering surface.

mod chart;
mod narrative;

pub use chart::{
    temperature_chart, usage_chart, ChartKind, ChartSeries, ChartSpec, ColorScale, HighlightBand,
};
pub use narrative::anomaly_narrative;
