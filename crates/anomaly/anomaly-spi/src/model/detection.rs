//! Tagged detection result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::AnomalyWindow;

/// Outcome of one detection pass.
///
/// `NoAnomalies` is an explicit variant rather than an empty collection or a
/// null sentinel; detectors never produce `Anomalies` with an empty payload,
/// so calling code can branch on the variant alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "findings", rename_all = "snake_case")]
pub enum Detection<T> {
    /// The series showed nothing unusual.
    NoAnomalies,
    /// At least one anomaly was found.
    Anomalies(T),
}

/// Single-day outlier result: the flagged calendar dates.
pub type DailyOutliers = Detection<Vec<NaiveDate>>;

/// Prolonged anomaly result: the flagged windows, in chronological order.
pub type ProlongedAnomalies = Detection<Vec<AnomalyWindow>>;

impl<T> Detection<T> {
    /// Whether anything was flagged.
    pub fn is_anomalous(&self) -> bool {
        matches!(self, Detection::Anomalies(_))
    }

    /// The findings, if any.
    pub fn findings(&self) -> Option<&T> {
        match self {
            Detection::NoAnomalies => None,
            Detection::Anomalies(findings) => Some(findings),
        }
    }
}

impl<U> Detection<Vec<U>> {
    /// Build a detection from a possibly-empty list of findings, collapsing
    /// an empty list into `NoAnomalies`.
    pub fn from_findings(findings: Vec<U>) -> Self {
        if findings.is_empty() {
            Detection::NoAnomalies
        } else {
            Detection::Anomalies(findings)
        }
    }

    /// Number of findings (zero for `NoAnomalies`).
    pub fn count(&self) -> usize {
        match self {
            Detection::NoAnomalies => 0,
            Detection::Anomalies(findings) => findings.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, day).unwrap()
    }

    #[test]
    fn test_from_findings_empty_collapses_to_no_anomalies() {
        let detection: DailyOutliers = Detection::from_findings(Vec::new());
        assert_eq!(detection, Detection::NoAnomalies);
        assert!(!detection.is_anomalous());
        assert_eq!(detection.count(), 0);
    }

    #[test]
    fn test_from_findings_nonempty() {
        let detection = DailyOutliers::from_findings(vec![d(15)]);
        assert!(detection.is_anomalous());
        assert_eq!(detection.count(), 1);
        assert_eq!(detection.findings(), Some(&vec![d(15)]));
    }

    #[test]
    fn test_serde_tagging() {
        let none: DailyOutliers = Detection::NoAnomalies;
        let json = serde_json::to_string(&none).unwrap();
        assert_eq!(json, r#"{"status":"no_anomalies"}"#);

        let some = DailyOutliers::from_findings(vec![d(15)]);
        let json = serde_json::to_string(&some).unwrap();
        assert!(json.contains("anomalies"));
        assert!(json.contains("2024-08-15"));

        let back: DailyOutliers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, some);
    }
}
