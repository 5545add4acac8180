//! Whole-series population z-scores.

/// Compute the population z-score of every value over the entire series.
///
/// The baseline is the whole window, not a rolling one: every score is
/// `(x - mean) / stddev` with mean and standard deviation taken over all
/// values. Returns `None` when the score is undefined (fewer than two
/// values, or zero variance) so callers never see NaN; an undefined score
/// means "never anomalous".
pub fn population_zscores(values: &[f64]) -> Option<Vec<f64>> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 || !std_dev.is_finite() {
        return None;
    }
    Some(values.iter().map(|&x| (x - mean) / std_dev).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zscores_basic() {
        // mean 3, population stddev sqrt(2)
        let scores = population_zscores(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(scores.len(), 5);
        assert!((scores[2]).abs() < 1e-12);
        assert!((scores[4] - 2.0 / 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((scores[0] + 2.0 / 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_zscores_sum_to_zero() {
        let scores = population_zscores(&[10.0, 12.0, 9.0, 14.0, 8.0, 11.0]).unwrap();
        let sum: f64 = scores.iter().sum();
        assert!(sum.abs() < 1e-9);
    }

    #[test]
    fn test_constant_series_is_undefined() {
        assert!(population_zscores(&[100.0; 30]).is_none());
    }

    #[test]
    fn test_short_series_is_undefined() {
        assert!(population_zscores(&[]).is_none());
        assert!(population_zscores(&[42.0]).is_none());
    }
}
