//! Narrative text assembly.

use anomaly_spi::{DailyOutliers, ProlongedAnomalies};
use weather::WeatherSummary;

const NO_ANOMALIES_MESSAGE: &str =
    "No anomalies were detected in the smart meter usage data.";

const DIAGNOSIS_INSTRUCTION: &str = "Help the user diagnose the likely causes of these \
     anomalies, and compare the temperature on each anomaly against the overall average.";

/// Assemble the narrative text block for the conversational layer.
///
/// Pure function of the two detections and the weather summary. The overall
/// temperature line is always the final sentence; anomaly paragraphs appear
/// only for categories that found something.
pub fn anomaly_narrative(
    daily: &DailyOutliers,
    prolonged: &ProlongedAnomalies,
    weather: &WeatherSummary,
) -> String {
    if !daily.is_anomalous() && !prolonged.is_anomalous() {
        return format!(
            "{} {}",
            NO_ANOMALIES_MESSAGE,
            weather.average_temperature_text()
        );
    }

    let mut paragraphs = Vec::new();

    if let Some(dates) = daily.findings() {
        let listed = dates
            .iter()
            .map(|date| date.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut paragraph = format!(
            "Single-day usage anomalies were detected on the following dates: {}.",
            listed
        );
        if let Some(temps) = weather.daily_temperatures_text() {
            paragraph.push(' ');
            paragraph.push_str(&temps);
        }
        paragraphs.push(paragraph);
    }

    if let Some(windows) = prolonged.findings() {
        let listed = windows
            .iter()
            .map(|window| window.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let mut paragraph = format!(
            "Prolonged usage anomalies were detected over the following periods: {}.",
            listed
        );
        if let Some(temps) = weather.prolonged_temperatures_text() {
            paragraph.push(' ');
            paragraph.push_str(&temps);
        }
        paragraphs.push(paragraph);
    }

    paragraphs.push(DIAGNOSIS_INSTRUCTION.to_string());
    paragraphs.push(weather.average_temperature_text());
    paragraphs.join("\n\n")
}
