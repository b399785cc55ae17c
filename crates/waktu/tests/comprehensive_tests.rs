use std::sync::Arc;

use chrono::{Duration, NaiveDate, Timelike, TimeZone, Utc};
use waktu::location::{FixedGps, JsonFileStore, MemoryStore, NoGps};
use waktu::prelude::*;
use waktu::{to_hijri, estimate_prayer_times};

fn minutes(t: chrono::NaiveTime) -> i64 {
    i64::from(t.hour() * 60 + t.minute())
}

#[test]
fn test_to_hijri_safety() {
    let bad_date = NaiveDate::from_ymd_opt(-500, 1, 1).unwrap();
    assert!(to_hijri(bad_date, 0).is_err(), "Should return error for negative year");
    let late = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
    assert!(matches!(to_hijri(late, 0), Err(WaktuError::DateOutOfRange { .. })));
}

#[test]
fn test_calculator_builder_defaults() {
    let calc = LocalPrayerTimesCalculator::default();
    assert_eq!(calc.method(), CalculationMethod::Kemenag);

    let calc = LocalPrayerTimesCalculator::new(CalculationMethod::Jakim).asr_juristic(AsrJuristic::Hanafi);
    assert_eq!(calc.method(), CalculationMethod::Jakim);
}

#[test]
fn test_west_to_east_dhuhr_progression() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let cities = IndonesianCitiesService::new();
    let dhuhr = |id: &str| {
        let city = cities.find_by_id(id).unwrap();
        let times = LocalPrayerTimesCalculator::default().calculate(city.coords, date);
        // compare on a common UTC clock
        minutes(times.timings.dhuhr) - i64::from(times.utc_offset_minutes)
    };
    // The sun crosses Aceh last, Jayapura first.
    assert!(dhuhr("banda-aceh") > dhuhr("jakarta"));
    assert!(dhuhr("jakarta") > dhuhr("makassar"));
    assert!(dhuhr("makassar") > dhuhr("jayapura"));
}

#[test]
fn test_zone_clocks_follow_city_zone() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let cities = IndonesianCitiesService::new();
    for city in cities.all() {
        let times = LocalPrayerTimesCalculator::default().calculate(city.coords, date);
        assert_eq!(times.utc_offset_minutes, city.zone.utc_offset_minutes(), "{}", city.name);
        assert!(times.timings.is_ordered(), "{}", city.name);
    }
}

#[test]
fn test_isha_after_maghrib_for_every_method() {
    let jakarta = GeoCoordinate::new(-6.2088, 106.8456).unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    for method in CalculationMethod::ALL {
        let t = estimate_prayer_times(jakarta, date, method);
        let gap = minutes(t.isha) - minutes(t.maghrib);
        assert!((45..=100).contains(&gap), "{method}: gap {gap}");
    }
}

#[test]
fn test_manual_city_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut config = Config::default();
    config.location.store_path = Some(path.clone());
    let mut svc = PrayerTimesService::from_config(config.clone()).unwrap();
    svc.set_manual_city("Kota Medan").unwrap();
    drop(svc);

    let store = Arc::new(JsonFileStore::open(&path).unwrap());
    let mut svc = PrayerTimesService::new(config, store, NoGps).unwrap();
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let loc = rt.block_on(svc.current_location(Utc::now())).unwrap();
    assert_eq!(loc.source, LocationSource::Manual);
    assert!(loc.label.starts_with("Medan"));
}

#[tokio::test]
async fn test_stale_cache_beats_hints_when_gps_times_out() {
    let store = Arc::new(MemoryStore::new());
    let now = Utc.with_ymd_and_hms(2025, 5, 10, 0, 0, 0).unwrap();

    let mut svc = PrayerTimesService::new(Config::default(), store.clone(), FixedGps::at(GeoCoordinate::new_unchecked(-8.65, 115.2167)))
        .unwrap();
    let first = svc.current_location(now).await.unwrap();
    assert_eq!(first.source, LocationSource::Gps);
    assert!(first.label.starts_with("Denpasar"));

    let mut offline = PrayerTimesService::new(Config::default(), store, FixedGps(GpsOutcome::Timeout))
        .unwrap()
        .hints(LocaleHints::new().timezone("Asia/Jakarta"));
    let later = offline.current_location(now + Duration::days(3)).await.unwrap();
    assert_eq!(later.source, LocationSource::StaleCache);
    assert_eq!(later.label, first.label);
}

#[tokio::test]
async fn test_full_day_flow() {
    let mut svc = PrayerTimesService::new(Config::default(), Arc::new(MemoryStore::new()), NoGps)
        .unwrap()
        .hints(LocaleHints::new().language("id-ID"));
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 30, 0).unwrap(); // 19:30 WIB
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

    let schedule = svc.prayer_times(date, now).await.unwrap();
    assert_eq!(schedule.location.source, LocationSource::LanguageHint);
    assert_eq!(schedule.location.label, "Jakarta");
    assert!(schedule.hijri.is_some());

    let next = svc.next_prayer(&schedule.times, now).unwrap();
    assert_eq!(next.prayer, Prayer::Fajr);
    assert_eq!(next.at.date(), date.succ_opt().unwrap());
    assert!(svc.reminders(&schedule.times, now).is_empty());
}
