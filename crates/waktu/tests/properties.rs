use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use waktu::astronomy::bounds;
use waktu::location::{resolve_location, CachedLocation, LocaleHints, ManualLocation};
use waktu::prelude::*;

fn method_strategy() -> impl Strategy<Value = CalculationMethod> {
    prop::sample::select(CalculationMethod::ALL.to_vec())
}

fn gps_strategy() -> impl Strategy<Value = GpsOutcome> {
    prop_oneof![
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GpsOutcome::Fix {
            coords: GeoCoordinate::new_unchecked(lat, lng),
            accuracy_m: None,
        }),
        Just(GpsOutcome::PermissionDenied),
        Just(GpsOutcome::Unavailable),
        Just(GpsOutcome::Timeout),
        Just(GpsOutcome::Skipped),
    ]
}

proptest! {
    /// Invariant: every schedule is strictly ordered, whatever the place, day or method.
    #[test]
    fn timings_always_ordered(
        lat in -65.0f64..65.0,
        lng in -180.0f64..180.0,
        days in 0i64..36500,
        method in method_strategy(),
        hanafi in any::<bool>(),
    ) {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days);
        let asr = if hanafi { AsrJuristic::Hanafi } else { AsrJuristic::Standard };
        let times = LocalPrayerTimesCalculator::new(method)
            .asr_juristic(asr)
            .calculate(GeoCoordinate::new_unchecked(lat, lng), date);
        prop_assert!(times.timings.is_ordered(), "{:?}", times.timings);
    }

    /// Invariant: obligatory prayers and sunrise stay inside their plausible windows.
    #[test]
    fn timings_within_bounds(
        lat in -90.0f64..=90.0,
        lng in -180.0f64..=180.0,
        days in 0i64..36500,
        method in method_strategy(),
    ) {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days);
        let times = LocalPrayerTimesCalculator::new(method).calculate(GeoCoordinate::new_unchecked(lat, lng), date);
        for (prayer, at) in times.timings.entries() {
            if let Some((lo, hi)) = bounds(prayer) {
                prop_assert!(lo <= at && at <= hi, "{prayer} {at} outside {lo}-{hi}");
            }
        }
    }

    /// Invariant: resolution is total and honors the manual override.
    #[test]
    fn resolve_is_total(
        has_manual in any::<bool>(),
        cache_age_hours in prop::option::of(-48i64..2000),
        gps in gps_strategy(),
        tz in prop::option::of("[A-Za-z/_]{0,20}"),
        lang in prop::option::of("[a-z]{0,3}"),
        offset in prop::option::of(-720i32..=840),
    ) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let manual = has_manual.then(|| ManualLocation {
            coords: GeoCoordinate::new_unchecked(-0.9471, 100.4172),
            label: "Padang".into(),
            city_id: None,
        });
        let cached = cache_age_hours.map(|h| CachedLocation {
            coords: GeoCoordinate::new_unchecked(-6.9175, 107.6191),
            label: None,
            cached_at: now - Duration::hours(h),
            source: LocationSource::Gps,
        });
        let hints = LocaleHints { timezone: tz, language: lang, utc_offset_minutes: offset };

        let r = resolve_location(manual.as_ref(), cached.as_ref(), &gps, &hints, now, Duration::hours(24));
        prop_assert!(r.coords.lat.is_finite() && r.coords.lng.is_finite());
        prop_assert!(!r.label.is_empty());
        if has_manual {
            prop_assert_eq!(r.source, LocationSource::Manual);
        }
        if !has_manual && cached.is_some() {
            prop_assert!(r.source.is_precise());
        }
    }

    /// Invariant: gazetteer search never returns more than asked and is sorted by score.
    #[test]
    fn search_respects_limit(query in "[a-z ]{0,12}", limit in 0usize..20) {
        let hits = IndonesianCitiesService::new().search(&query, limit);
        prop_assert!(hits.len() <= limit);
        prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
