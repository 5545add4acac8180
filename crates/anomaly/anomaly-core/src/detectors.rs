//! Anomaly detector implementations.

use anomaly_api::{OutlierConfig, ProlongedConfig};
use anomaly_spi::{
    AnomalyError, AnomalyWindow, DailyOutliers, Detection, ProlongedAnomalies, Result,
    SeriesDetector,
};
use chrono::NaiveDate;
use series_spi::DailySeries;
use tracing::debug;

use crate::zscore::population_zscores;

// ============================================================================
// Single-Day Outlier Detector
// ============================================================================

/// Flags individual days whose usage is unusually high.
///
/// Scores every day with a whole-series population z-score and flags those
/// strictly above the configured threshold. One-sided: low-usage days are
/// never flagged.
#[derive(Debug, Clone)]
pub struct OutlierDetector {
    config: OutlierConfig,
}

impl OutlierDetector {
    /// Create a detector, validating the configuration up front.
    pub fn new(config: OutlierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Detector with the default threshold (2.0).
    pub fn with_defaults() -> Self {
        Self {
            config: OutlierConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &OutlierConfig {
        &self.config
    }
}

impl Default for OutlierDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SeriesDetector for OutlierDetector {
    type Finding = NaiveDate;

    fn name(&self) -> &str {
        "single-day-outlier"
    }

    fn detect(&self, series: &DailySeries) -> Result<DailyOutliers> {
        if series.is_empty() {
            return Err(AnomalyError::EmptySeries);
        }

        let Some(scores) = population_zscores(&series.values()) else {
            // Too short or zero variance: nothing can qualify.
            debug!(days = series.len(), "z-score undefined, no outliers");
            return Ok(Detection::NoAnomalies);
        };

        let flagged: Vec<NaiveDate> = series
            .iter()
            .zip(scores.iter())
            .filter(|(_, &z)| z > self.config.zscore_threshold)
            .map(|(point, _)| point.date)
            .collect();

        debug!(
            days = series.len(),
            flagged = flagged.len(),
            threshold = self.config.zscore_threshold,
            "single-day outlier pass complete"
        );
        Ok(Detection::from_findings(flagged))
    }
}

// ============================================================================
// Prolonged Anomaly Detector
// ============================================================================

/// Flags sustained multi-day runs of elevated usage.
///
/// For every trailing window length `w` from the configured minimum up to
/// the series length, computes the rolling mean of the whole-series z-score.
/// A day qualifies when some window ending on it averages above the
/// threshold; the longest such window is what gets marked. Marked spans are
/// then collapsed into maximal calendar-contiguous [`AnomalyWindow`]s.
#[derive(Debug, Clone)]
pub struct ProlongedDetector {
    config: ProlongedConfig,
}

impl ProlongedDetector {
    /// Create a detector, validating the configuration up front.
    pub fn new(config: ProlongedConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Detector with the default parameters (3 days, threshold 1.5).
    pub fn with_defaults() -> Self {
        Self {
            config: ProlongedConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ProlongedConfig {
        &self.config
    }

    /// For each day, the length of the longest qualifying trailing window
    /// ending on it, or zero.
    ///
    /// A window qualifies only if every day in it sits above the series
    /// mean: one extreme day can drag a window's average over the threshold
    /// on its own, and that is a single-day outlier, not a prolonged run.
    fn max_run_lengths(&self, scores: &[f64]) -> Vec<usize> {
        let n = scores.len();
        let mut prefix = vec![0.0; n + 1];
        for (i, &z) in scores.iter().enumerate() {
            prefix[i + 1] = prefix[i] + z;
        }

        // Length of the run of above-mean days ending at each index.
        let mut elevated_run = vec![0usize; n];
        for i in 0..n {
            if scores[i] > 0.0 {
                elevated_run[i] = if i > 0 { elevated_run[i - 1] + 1 } else { 1 };
            }
        }

        let mut max_run = vec![0usize; n];
        // Window lengths ascend, so a plain assignment keeps the maximum.
        for w in self.config.min_consecutive_days..=n {
            for i in (w - 1)..n {
                if elevated_run[i] < w {
                    continue;
                }
                let rolling_mean = (prefix[i + 1] - prefix[i + 1 - w]) / w as f64;
                if rolling_mean > self.config.zscore_threshold {
                    max_run[i] = w;
                }
            }
        }
        max_run
    }
}

impl Default for ProlongedDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SeriesDetector for ProlongedDetector {
    type Finding = AnomalyWindow;

    fn name(&self) -> &str {
        "prolonged-anomaly"
    }

    fn detect(&self, series: &DailySeries) -> Result<ProlongedAnomalies> {
        if series.is_empty() {
            return Err(AnomalyError::EmptySeries);
        }

        let n = series.len();
        if n < self.config.min_consecutive_days {
            debug!(
                days = n,
                min_days = self.config.min_consecutive_days,
                "series shorter than minimum run length, no prolonged anomalies"
            );
            return Ok(Detection::NoAnomalies);
        }

        let Some(scores) = population_zscores(&series.values()) else {
            debug!(days = n, "z-score undefined, no prolonged anomalies");
            return Ok(Detection::NoAnomalies);
        };

        // Mark every day inside some qualifying span [i - L + 1, i].
        let max_run = self.max_run_lengths(&scores);
        let mut marked = vec![false; n];
        for (i, &run) in max_run.iter().enumerate() {
            if run > 0 {
                for day in &mut marked[i + 1 - run..=i] {
                    *day = true;
                }
            }
        }

        // Collapse marks into maximal windows, merging spans with no
        // calendar-day gap between them.
        let dates = series.dates();
        let mut windows: Vec<AnomalyWindow> = Vec::new();
        for (i, &is_marked) in marked.iter().enumerate() {
            if !is_marked {
                continue;
            }
            match windows.last_mut() {
                Some(last) if dates[i] == last.day_after_end() => last.end = dates[i],
                _ => windows.push(AnomalyWindow::single(dates[i])),
            }
        }

        debug!(
            days = n,
            windows = windows.len(),
            threshold = self.config.zscore_threshold,
            "prolonged anomaly pass complete"
        );
        Ok(Detection::from_findings(windows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + chrono::Days::new(u64::from(day - 1))
    }

    fn series_of(values: &[f64]) -> DailySeries {
        DailySeries::from_pairs(
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| (d(1 + i as u32), v)),
        )
        .unwrap()
    }

    // OutlierDetector

    #[test]
    fn test_outlier_constant_series_no_anomalies() {
        let series = series_of(&[100.0; 30]);
        let result = OutlierDetector::with_defaults().detect(&series).unwrap();
        assert_eq!(result, Detection::NoAnomalies);
    }

    #[test]
    fn test_outlier_single_day_series_no_anomalies() {
        let series = series_of(&[100.0]);
        let result = OutlierDetector::with_defaults().detect(&series).unwrap();
        assert_eq!(result, Detection::NoAnomalies);
    }

    #[test]
    fn test_outlier_empty_series_is_error() {
        let series = DailySeries::new(Vec::new()).unwrap();
        let err = OutlierDetector::with_defaults().detect(&series).unwrap_err();
        assert!(matches!(err, AnomalyError::EmptySeries));
    }

    #[test]
    fn test_outlier_flags_single_spike() {
        let mut values = vec![100.0; 30];
        values[14] = 1000.0;
        let series = series_of(&values);

        let result = OutlierDetector::with_defaults().detect(&series).unwrap();
        assert_eq!(result.findings(), Some(&vec![d(15)]));
    }

    #[test]
    fn test_outlier_is_one_sided() {
        // A deep drop has a strongly negative z-score and must not be flagged.
        let mut values = vec![100.0; 30];
        values[14] = 0.0;
        let series = series_of(&values);

        let result = OutlierDetector::with_defaults().detect(&series).unwrap();
        assert_eq!(result, Detection::NoAnomalies);
    }

    #[test]
    fn test_outlier_rejects_bad_config() {
        assert!(OutlierDetector::new(OutlierConfig::new(-2.0)).is_err());
    }

    // ProlongedDetector

    #[test]
    fn test_prolonged_constant_series_no_anomalies() {
        let series = series_of(&[100.0; 30]);
        let result = ProlongedDetector::with_defaults().detect(&series).unwrap();
        assert_eq!(result, Detection::NoAnomalies);
    }

    #[test]
    fn test_prolonged_short_series_no_anomalies() {
        let series = series_of(&[100.0, 500.0]);
        let result = ProlongedDetector::with_defaults().detect(&series).unwrap();
        assert_eq!(result, Detection::NoAnomalies);
    }

    #[test]
    fn test_prolonged_single_spike_not_prolonged() {
        let mut values = vec![100.0; 30];
        values[14] = 1000.0;
        let series = series_of(&values);

        let result = ProlongedDetector::with_defaults().detect(&series).unwrap();
        assert_eq!(result, Detection::NoAnomalies);
    }

    #[test]
    fn test_prolonged_flags_sustained_elevation_as_one_window() {
        // Days 10..=14 (indices 9..=13) elevated well above the rest.
        let mut values = vec![100.0; 30];
        for v in &mut values[9..14] {
            *v = 400.0;
        }
        let series = series_of(&values);

        let result = ProlongedDetector::with_defaults().detect(&series).unwrap();
        let windows = result.findings().expect("expected a prolonged anomaly");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], AnomalyWindow::new(d(10), d(14)));
    }

    #[test]
    fn test_prolonged_windows_are_ordered_and_separated() {
        let mut values = vec![100.0; 40];
        for v in &mut values[5..10] {
            *v = 500.0;
        }
        for v in &mut values[25..30] {
            *v = 500.0;
        }
        let series = series_of(&values);

        let result = ProlongedDetector::with_defaults().detect(&series).unwrap();
        let windows = result.findings().expect("expected prolonged anomalies");
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0], AnomalyWindow::new(d(6), d(10)));
        assert_eq!(windows[1], AnomalyWindow::new(d(26), d(30)));
        // A zero-day gap would have been merged.
        assert!(windows[0].day_after_end() < windows[1].start);
    }

    #[test]
    fn test_prolonged_windows_split_across_missing_date() {
        // Elevated run with one calendar day absent from the series in the
        // middle: the marks collapse into two windows, not one.
        let mut pairs: Vec<(NaiveDate, f64)> = Vec::new();
        for i in 0..30u32 {
            let date = d(1 + i);
            if i == 12 {
                continue; // day 13 has no samples
            }
            let value = if (9..15).contains(&i) { 400.0 } else { 100.0 };
            pairs.push((date, value));
        }
        let series = DailySeries::from_pairs(pairs).unwrap();

        let result = ProlongedDetector::with_defaults().detect(&series).unwrap();
        let windows = result.findings().expect("expected prolonged anomalies");
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0], AnomalyWindow::new(d(10), d(12)));
        assert_eq!(windows[1], AnomalyWindow::new(d(14), d(15)));
    }

    #[test]
    fn test_prolonged_rejects_zero_min_days() {
        assert!(ProlongedDetector::new(ProlongedConfig::new(0, 1.5)).is_err());
    }

    #[test]
    fn test_prolonged_series_shorter_than_min_days() {
        let config = ProlongedConfig::new(10, 1.5);
        let detector = ProlongedDetector::new(config).unwrap();
        let series = series_of(&[100.0, 900.0, 900.0, 900.0, 100.0]);
        assert_eq!(detector.detect(&series).unwrap(), Detection::NoAnomalies);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let mut values = vec![100.0; 30];
        for v in &mut values[9..14] {
            *v = 400.0;
        }
        values[20] = 800.0;
        let series = series_of(&values);

        let outlier = OutlierDetector::with_defaults();
        let prolonged = ProlongedDetector::with_defaults();
        assert_eq!(
            outlier.detect(&series).unwrap(),
            outlier.detect(&series).unwrap()
        );
        assert_eq!(
            prolonged.detect(&series).unwrap(),
            prolonged.detect(&series).unwrap()
        );
    }
}
