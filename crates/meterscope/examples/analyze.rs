//! Full analysis pass over synthetic readings
//!
//! Run with: cargo run --example analyze -p meterscope

use chrono::{Days, NaiveDate};
use meterscope::{run_analysis, AnalysisConfig};
use series::Reading;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();

    // A month of half-hourly usage with a hot week in the middle.
    let mut usage = Vec::new();
    let mut temperature = Vec::new();
    for day in 0..30u64 {
        let date = start + Days::new(day);
        let hot = (12..17).contains(&day);
        for slot in 0..48u32 {
            let ts = date.and_hms_opt(slot / 2, (slot % 2) * 30, 0).unwrap();
            usage.push(Reading::new(ts, if hot { 0.9 } else { 0.22 }));
        }
        for hour in [3u32, 9, 15, 21] {
            let ts = date.and_hms_opt(hour, 0, 0).unwrap();
            temperature.push(Reading::new(ts, if hot { 33.0 } else { 21.0 }));
        }
    }

    let report = run_analysis(&usage, &temperature, &AnalysisConfig::default())?;

    println!("{}\n", report.narrative);
    println!(
        "usage chart: {} points, {} highlight bands",
        report.usage_chart.series[0].points.len(),
        report.usage_chart.bands.len()
    );
    println!(
        "temperature chart: {} bars",
        report.temperature_chart.series[0].points.len()
    );

    Ok(())
}
