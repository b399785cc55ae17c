//! Today's schedule for wherever the fallback chain puts you.
//!
//! Run with: cargo run --example today -- [city]
//! `RUST_LOG=waktu=debug` shows how the location was resolved.

use chrono::Utc;
use waktu::logging::{init_logging, Verbosity};
use waktu::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(Verbosity::Normal);

    let config = Config::load()?;
    let mut service = PrayerTimesService::from_config(config)?.with_system_hints();

    if let Some(city) = std::env::args().nth(1) {
        let manual = service.set_manual_city(&city)?;
        tracing::info!(label = %manual.label, "using city from command line");
    }

    let now = Utc::now();
    let schedule = service.prayer_times(now.date_naive(), now).await?;
    let times = &schedule.times;

    println!("=====================================");
    println!("  📍 {} ({})", schedule.location.label, schedule.location.source);
    println!("  {} · {}", times.date.format("%A, %d %B %Y"), times.method);
    if let Some(hijri) = schedule.hijri {
        println!("  {hijri}");
    }
    println!("=====================================");
    for (prayer, at) in times.timings.to_strings() {
        println!("  {:<8} {}", prayer.label_id(), at);
    }

    if let Some(next) = service.next_prayer(times, now) {
        println!("\n  Berikutnya: {} dalam {}", next.prayer.label_id(), next.countdown_id());
    }
    Ok(())
}
