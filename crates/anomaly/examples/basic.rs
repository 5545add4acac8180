//! Basic example demonstrating usage anomaly detection
//!
//! Run with: cargo run --example basic -p anomaly

use anomaly::{Detection, OutlierDetector, ProlongedDetector, SeriesDetector};
use chrono::NaiveDate;
use series_spi::DailySeries;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== anomaly: basic detection example ===\n");

    // A month of daily usage totals with a five-day elevated run and one spike.
    let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    let mut values = vec![12.0; 30];
    for v in &mut values[9..14] {
        *v = 60.0;
    }
    values[24] = 90.0;

    let series = DailySeries::from_pairs(
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (start + chrono::Days::new(i as u64), v)),
    )?;

    println!("1. Single-day outliers (z > 2.0)");
    let outliers = OutlierDetector::with_defaults().detect(&series)?;
    match &outliers {
        Detection::NoAnomalies => println!("   none\n"),
        Detection::Anomalies(dates) => println!("   flagged: {:?}\n", dates),
    }

    println!("2. Prolonged anomalies (3+ days, rolling z > 1.5)");
    let prolonged = ProlongedDetector::with_defaults().detect(&series)?;
    match &prolonged {
        Detection::NoAnomalies => println!("   none"),
        Detection::Anomalies(windows) => {
            for window in windows {
                println!("   {} ({} days)", window, window.num_days());
            }
        }
    }

    Ok(())
}
