//! Single-pass analysis orchestration.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use anomaly::{
    AnomalyError, DailyOutliers, OutlierConfig, OutlierDetector, ProlongedAnomalies,
    ProlongedConfig, ProlongedDetector, SeriesDetector,
};
use report::{anomaly_narrative, temperature_chart, usage_chart, ChartSpec};
use series::{DailyAggregator, DailySeries, Reading, SeriesError};
use weather::{correlate, WeatherError, WeatherSummary};

/// Detection parameters for one analysis pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Single-day outlier detection.
    pub outlier: OutlierConfig,
    /// Prolonged anomaly detection.
    pub prolonged: ProlongedConfig,
}

/// Everything one pass produces, returned to the caller instead of being
/// stashed in ambient session state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Daily usage totals the detectors ran on.
    pub daily_usage: DailySeries,
    /// Daily mean temperatures used for correlation.
    pub daily_temperature: DailySeries,
    /// Single-day outlier detection result.
    pub outliers: DailyOutliers,
    /// Prolonged anomaly detection result.
    pub prolonged: ProlongedAnomalies,
    /// Temperature statistics for the detected anomalies.
    pub weather: WeatherSummary,
    /// Narrative block for the conversational layer.
    pub narrative: String,
    /// Usage line chart with anomaly highlight bands.
    pub usage_chart: ChartSpec,
    /// Temperature bar chart.
    pub temperature_chart: ChartSpec,
}

/// Errors surfaced by a full analysis pass.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Anomaly(#[from] AnomalyError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

/// Run one complete analysis pass over raw usage and temperature readings.
///
/// Synchronous and stateless: aggregation, both detections, weather
/// correlation, narrative, and chart building all happen here, in
/// dependency order, and everything is handed back in the report.
pub fn run_analysis(
    usage_readings: &[Reading],
    temperature_readings: &[Reading],
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    info!(
        usage_samples = usage_readings.len(),
        temperature_samples = temperature_readings.len(),
        "starting analysis pass"
    );

    let daily_usage = DailyAggregator::usage().aggregate(usage_readings)?;
    let daily_temperature = DailyAggregator::temperature().aggregate(temperature_readings)?;

    let outliers = OutlierDetector::new(config.outlier)?.detect(&daily_usage)?;
    let prolonged = ProlongedDetector::new(config.prolonged)?.detect(&daily_usage)?;

    let weather = correlate(&daily_temperature, &outliers, &prolonged)?;
    let narrative = anomaly_narrative(&outliers, &prolonged, &weather);
    let usage_chart = usage_chart(&daily_usage, &outliers, &prolonged);
    let temperature_chart = temperature_chart(&daily_temperature);

    info!(
        days = daily_usage.len(),
        outliers = outliers.count(),
        windows = prolonged.count(),
        "analysis pass complete"
    );

    Ok(AnalysisReport {
        daily_usage,
        daily_temperature,
        outliers,
        prolonged,
        weather,
        narrative,
        usage_chart,
        temperature_chart,
    })
}
