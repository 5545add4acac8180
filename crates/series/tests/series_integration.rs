//! Integration tests for the series facade crate.

use chrono::NaiveDate;
use series::{DailyAggregator, DailySeries, Reading};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, n).unwrap()
}

/// Half-hourly meter reads across three days, one day with no samples.
fn meter_readings() -> Vec<Reading> {
    let mut readings = Vec::new();
    for (d, per_read) in [(1, 0.25), (2, 0.30), (4, 0.20)] {
        for slot in 0..48 {
            let ts = day(d)
                .and_hms_opt(slot / 2, (slot % 2) * 30, 0)
                .unwrap();
            readings.push(Reading::new(ts, per_read));
        }
    }
    readings
}

#[test]
fn test_usage_aggregation_end_to_end() {
    let series = DailyAggregator::usage()
        .aggregate(&meter_readings())
        .unwrap();

    assert_eq!(series.len(), 3);
    assert!((series.get(day(1)).unwrap() - 12.0).abs() < 1e-9);
    assert!((series.get(day(2)).unwrap() - 14.4).abs() < 1e-9);
    assert_eq!(series.get(day(3)), None);
    assert!((series.get(day(4)).unwrap() - 9.6).abs() < 1e-9);
}

#[test]
fn test_temperature_aggregation_end_to_end() {
    let series = DailyAggregator::temperature()
        .aggregate(&meter_readings())
        .unwrap();

    // Mean of 48 identical samples is the sample value.
    assert!((series.get(day(1)).unwrap() - 0.25).abs() < 1e-9);
    assert!((series.get(day(2)).unwrap() - 0.30).abs() < 1e-9);
}

#[test]
fn test_series_round_trips_through_facade_types() {
    let series = DailySeries::from_pairs(vec![(day(1), 1.0), (day(2), 2.0)]).unwrap();
    assert_eq!(series.values(), vec![1.0, 2.0]);
    assert_eq!(series.mean(), Some(1.5));
}
