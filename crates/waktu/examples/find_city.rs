//! Autocomplete over the built-in Indonesian gazetteer.
//!
//! Run with: cargo run --example find_city -- jogja

use chrono::NaiveDate;
use waktu::prelude::*;

fn main() -> anyhow::Result<()> {
    let query = std::env::args().nth(1).unwrap_or_else(|| "bandung".to_string());
    let cities = IndonesianCitiesService::new();
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).ok_or_else(|| anyhow::anyhow!("bad date"))?;

    let suggestions = cities.autocomplete(&query, 8);
    if suggestions.is_empty() {
        println!("Tidak ada kota yang cocok dengan '{query}'");
        return Ok(());
    }

    for s in suggestions {
        let times = LocalPrayerTimesCalculator::default().calculate(s.city.coords, date);
        println!(
            "{:>3}  {:<40} {}  Subuh {}  Maghrib {}",
            s.score,
            s.label,
            s.city.zone,
            times.format(Prayer::Fajr),
            times.format(Prayer::Maghrib)
        );
    }
    Ok(())
}
