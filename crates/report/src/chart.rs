//! Parameterized chart descriptions.
//!
//! The engine stops at a fully parameterized description; turning it into
//! pixels belongs to whichever rendering surface the application embeds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use anomaly_spi::{DailyOutliers, ProlongedAnomalies};
use series_spi::DailySeries;

/// Chart geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Line graph
    Line,
    /// Bar chart
    Bar,
}

/// Color scale applied to the plotted values themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScale {
    /// Diverging cold-to-hot scale, centered on the series mean.
    DivergingTemperature,
}

/// One named data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// A translucent vertical band highlighting a date range.
///
/// `end` is exclusive, so a one-day band runs from the day to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightBand {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: (u8, u8, u8),
    pub opacity: f64,
    pub label: String,
}

/// A fully parameterized chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
    pub series: Vec<ChartSeries>,
    pub bands: Vec<HighlightBand>,
    pub color_scale: Option<ColorScale>,
}

/// Band color for single-day anomalies.
const DAILY_BAND_COLOR: (u8, u8, u8) = (214, 39, 40);
const DAILY_BAND_OPACITY: f64 = 0.30;

/// Band color for prolonged anomaly windows.
const PROLONGED_BAND_COLOR: (u8, u8, u8) = (255, 165, 0);
const PROLONGED_BAND_OPACITY: f64 = 0.20;

/// Build the usage chart: a line of daily totals with one band per
/// single-day anomaly and one per prolonged window.
pub fn usage_chart(
    usage: &DailySeries,
    daily: &DailyOutliers,
    prolonged: &ProlongedAnomalies,
) -> ChartSpec {
    let mut bands = Vec::new();

    if let Some(dates) = daily.findings() {
        for &date in dates {
            bands.push(HighlightBand {
                start: date,
                end: date + chrono::Days::new(1),
                color: DAILY_BAND_COLOR,
                opacity: DAILY_BAND_OPACITY,
                label: "Single-day anomaly".to_string(),
            });
        }
    }

    if let Some(windows) = prolonged.findings() {
        for window in windows {
            bands.push(HighlightBand {
                start: window.start,
                end: window.day_after_end(),
                color: PROLONGED_BAND_COLOR,
                opacity: PROLONGED_BAND_OPACITY,
                label: "Prolonged anomaly".to_string(),
            });
        }
    }

    ChartSpec {
        title: "Daily energy usage".to_string(),
        x_label: "Date".to_string(),
        y_label: "Usage (kWh)".to_string(),
        kind: ChartKind::Line,
        series: vec![ChartSeries {
            name: "Daily usage".to_string(),
            points: usage.iter().map(|p| (p.date, p.value)).collect(),
        }],
        bands,
        color_scale: None,
    }
}

/// Build the temperature chart: daily means as bars on a diverging scale.
pub fn temperature_chart(temperature: &DailySeries) -> ChartSpec {
    ChartSpec {
        title: "Daily mean temperature".to_string(),
        x_label: "Date".to_string(),
        y_label: "Temperature (degrees Celsius)".to_string(),
        kind: ChartKind::Bar,
        series: vec![ChartSeries {
            name: "Daily mean temperature".to_string(),
            points: temperature.iter().map(|p| (p.date, p.value)).collect(),
        }],
        bands: Vec::new(),
        color_scale: Some(ColorScale::DivergingTemperature),
    }
}
