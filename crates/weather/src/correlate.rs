//! Joining anomaly detections against a daily temperature series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use anomaly_spi::{AnomalyWindow, DailyOutliers, ProlongedAnomalies};
use series_spi::DailySeries;

use crate::error::{Result, WeatherError};

/// Descriptive temperature statistics for one analysis pass.
///
/// The overall average is always present; the per-day and per-window maps
/// are `None` exactly when the corresponding detection found nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Mean temperature across the full period.
    pub average_temperature: f64,
    /// Temperature on each single-day anomaly date.
    pub daily: Option<Vec<(NaiveDate, f64)>>,
    /// Mean temperature over each prolonged anomaly window.
    pub prolonged: Option<Vec<(AnomalyWindow, f64)>>,
}

impl WeatherSummary {
    /// Overall-average line, two decimal places.
    pub fn average_temperature_text(&self) -> String {
        format!(
            "The average temperature across the whole period was {:.2} degrees Celsius.",
            self.average_temperature
        )
    }

    /// Labeled, comma-joined per-day temperatures, if any anomalies exist.
    pub fn daily_temperatures_text(&self) -> Option<String> {
        self.daily.as_ref().map(|entries| {
            let joined = entries
                .iter()
                .map(|(date, temp)| format!("{}: {:.2}", date, temp))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Temperatures on single-day anomalies: {}.", joined)
        })
    }

    /// Labeled, comma-joined per-window mean temperatures, if any exist.
    pub fn prolonged_temperatures_text(&self) -> Option<String> {
        self.prolonged.as_ref().map(|entries| {
            let joined = entries
                .iter()
                .map(|(window, temp)| format!("{}: {:.2}", window, temp))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Average temperatures during prolonged anomalies: {}.", joined)
        })
    }
}

/// Correlate detections with the daily temperature series.
///
/// Every anomaly date must have a temperature sample; a missing one is a
/// hard [`WeatherError::MissingSample`], never silently skipped or filled.
pub fn correlate(
    temperature: &DailySeries,
    daily: &DailyOutliers,
    prolonged: &ProlongedAnomalies,
) -> Result<WeatherSummary> {
    let average_temperature = temperature.mean().ok_or(WeatherError::EmptySeries)?;

    let daily_temps = match daily.findings() {
        None => None,
        Some(dates) => {
            let mut entries = Vec::with_capacity(dates.len());
            for &date in dates {
                let temp = temperature
                    .get(date)
                    .ok_or(WeatherError::MissingSample { date })?;
                entries.push((date, temp));
            }
            Some(entries)
        }
    };

    let prolonged_temps = match prolonged.findings() {
        None => None,
        Some(windows) => {
            let mut entries = Vec::with_capacity(windows.len());
            for &window in windows {
                entries.push((window, window_mean(temperature, &window)?));
            }
            Some(entries)
        }
    };

    debug!(
        average = average_temperature,
        daily = daily_temps.as_ref().map(|d| d.len()).unwrap_or(0),
        windows = prolonged_temps.as_ref().map(|w| w.len()).unwrap_or(0),
        "weather correlation complete"
    );

    Ok(WeatherSummary {
        average_temperature,
        daily: daily_temps,
        prolonged: prolonged_temps,
    })
}

/// Mean temperature over a window, inclusive of both ends.
fn window_mean(temperature: &DailySeries, window: &AnomalyWindow) -> Result<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for date in window.days() {
        let temp = temperature
            .get(date)
            .ok_or(WeatherError::MissingSample { date })?;
        sum += temp;
        count += 1;
    }
    // Windows always span at least one day.
    Ok(sum / count as f64)
}
