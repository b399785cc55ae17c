//! Local prayer times estimation.
//!
//! Starts from the regional anchors in [`crate::region`] and applies, in order:
//! longitude correction, equation of time, latitude/method arc corrections,
//! seasonal day-length change, ihtiyat, bounds clamping and ordering.
//! Deterministic and offline; accuracy is a few minutes inside the
//! tabulated regions.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::region::{Region, RegionProfile};
use crate::solar::{
    asr_arc_hours, depression_arc_hours, equation_of_time_minutes, seasonal_delta_hours,
    HORIZON_DEPRESSION, TABLE_FAJR_ANGLE, TABLE_ISHA_ANGLE,
};
use waktu_types::{AsrJuristic, CalculationMethod, GeoCoordinate, IshaRule, MethodParams, Prayer, Timings};

/// Twilight times stretch faster than sunrise/sunset over the seasons.
const TWILIGHT_SEASONAL_FACTOR: f64 = 1.15;
/// Share of the seasonal change that reaches Asr.
const ASR_SEASONAL_FACTOR: f64 = 0.4;
/// Dhuha starts this long after sunrise.
const DHUHA_AFTER_SUNRISE_MINUTES: i64 = 28;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Plausible local-clock windows, in minutes after midnight.
const FAJR_WINDOW: (i64, i64) = (2 * 60, 7 * 60);
const SUNRISE_WINDOW: (i64, i64) = (3 * 60 + 30, 9 * 60);
const DHUHR_WINDOW: (i64, i64) = (11 * 60, 13 * 60 + 45);
const ASR_WINDOW: (i64, i64) = (13 * 60 + 30, 17 * 60 + 45);
const MAGHRIB_WINDOW: (i64, i64) = (16 * 60, 21 * 60 + 45);
const ISHA_WINDOW: (i64, i64) = (17 * 60 + 30, 23 * 60 + 45);

/// Window an obligatory prayer (or sunrise) is clamped into.
pub fn bounds(prayer: Prayer) -> Option<(NaiveTime, NaiveTime)> {
    let (lo, hi) = match prayer {
        Prayer::Fajr => FAJR_WINDOW,
        Prayer::Sunrise => SUNRISE_WINDOW,
        Prayer::Dhuhr => DHUHR_WINDOW,
        Prayer::Asr => ASR_WINDOW,
        Prayer::Maghrib => MAGHRIB_WINDOW,
        Prayer::Isha => ISHA_WINDOW,
        Prayer::Imsak | Prayer::Dhuha => return None,
    };
    Some((minutes_to_time(lo), minutes_to_time(hi)))
}

/// One day's estimate together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTimes {
    pub date: NaiveDate,
    pub coords: GeoCoordinate,
    pub region: Region,
    /// Offset of the clock the timings are expressed in.
    pub utc_offset_minutes: i32,
    pub method: CalculationMethod,
    pub asr_juristic: AsrJuristic,
    pub timings: Timings,
}

impl DailyTimes {
    /// Local date-time of `prayer` on this day.
    pub fn at(&self, prayer: Prayer) -> NaiveDateTime {
        self.date.and_time(self.timings.get(prayer))
    }

    /// `HH:MM` for `prayer`.
    pub fn format(&self, prayer: Prayer) -> String {
        self.timings.format(prayer)
    }
}

/// Offline prayer times estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalPrayerTimesCalculator {
    method: CalculationMethod,
    params: MethodParams,
    asr_juristic: AsrJuristic,
    utc_offset_minutes: Option<i32>,
}

impl Default for LocalPrayerTimesCalculator {
    fn default() -> Self {
        Self::new(CalculationMethod::default())
    }
}

impl LocalPrayerTimesCalculator {
    pub fn new(method: CalculationMethod) -> Self {
        Self {
            method,
            params: method.params(),
            asr_juristic: AsrJuristic::default(),
            utc_offset_minutes: None,
        }
    }

    /// Overrides the method's parameters (keeps the method label).
    pub fn params(mut self, params: MethodParams) -> Self {
        self.params = params;
        self
    }

    pub fn asr_juristic(mut self, asr: AsrJuristic) -> Self {
        self.asr_juristic = asr;
        self
    }

    /// Express results on a specific clock instead of the region's default zone.
    pub fn utc_offset(mut self, minutes: Option<i32>) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    /// Estimates the schedule for `coords` on `date`.
    pub fn calculate(&self, coords: GeoCoordinate, date: NaiveDate) -> DailyTimes {
        let region = Region::locate(coords);
        let mut profile = region.profile(coords.lng);
        if let Some(offset) = self.utc_offset_minutes {
            profile = profile.with_utc_offset(offset);
        }

        let timings = self.estimate(&profile, coords, date);

        DailyTimes {
            date,
            coords,
            region,
            utc_offset_minutes: profile.utc_offset_minutes,
            method: self.method,
            asr_juristic: self.asr_juristic,
            timings,
        }
    }

    fn estimate(&self, profile: &RegionProfile, coords: GeoCoordinate, date: NaiveDate) -> Timings {
        let base = profile.base;
        let (lat, ref_lat) = (coords.lat, profile.reference.lat);

        // Same shift for every prayer: position inside the zone plus the sun running fast or slow.
        let common = (profile.reference.lng - coords.lng) / 15.0 - equation_of_time_minutes(date) / 60.0;
        let delta = seasonal_delta_hours(lat, date);

        let horizon = depression_arc_hours(lat, HORIZON_DEPRESSION) - depression_arc_hours(ref_lat, HORIZON_DEPRESSION);
        let fajr_arc = depression_arc_hours(lat, self.params.fajr_angle) - depression_arc_hours(ref_lat, TABLE_FAJR_ANGLE);
        let shadow = match self.asr_juristic {
            AsrJuristic::Standard => 1.0,
            AsrJuristic::Hanafi => 2.0,
        };
        let asr_arc = asr_arc_hours(lat, shadow) - asr_arc_hours(ref_lat, 1.0);

        let fajr = base.fajr + common - fajr_arc - TWILIGHT_SEASONAL_FACTOR * delta;
        let sunrise = base.sunrise + common - horizon - delta;
        let dhuhr = base.dhuhr + common;
        let asr = base.asr + common + asr_arc + ASR_SEASONAL_FACTOR * delta;
        let maghrib = base.maghrib + common + horizon + delta;
        let isha = match self.params.isha {
            IshaRule::Angle(angle) => {
                let isha_arc = depression_arc_hours(lat, angle) - depression_arc_hours(ref_lat, TABLE_ISHA_ANGLE);
                base.isha + common + isha_arc + TWILIGHT_SEASONAL_FACTOR * delta
            }
            IshaRule::MinutesAfterMaghrib(minutes) => maghrib + minutes as f64 / 60.0,
        };

        let ihtiyat = self.params.ihtiyat_minutes;
        let fajr = clamp(to_minutes(fajr) + ihtiyat, FAJR_WINDOW);
        let sunrise = clamp(to_minutes(sunrise) - ihtiyat, SUNRISE_WINDOW);
        let dhuhr = clamp(to_minutes(dhuhr) + ihtiyat, DHUHR_WINDOW);
        let asr = clamp(to_minutes(asr) + ihtiyat, ASR_WINDOW);
        let maghrib = clamp(to_minutes(maghrib) + ihtiyat, MAGHRIB_WINDOW);
        let isha = clamp(to_minutes(isha) + ihtiyat, ISHA_WINDOW);

        let imsak = (fajr - self.params.imsak_buffer_minutes).max(0);
        let dhuha = sunrise + DHUHA_AFTER_SUNRISE_MINUTES;

        let mut minutes = [imsak, fajr, sunrise, dhuha, dhuhr, asr, maghrib, isha];
        enforce_order(&mut minutes);

        let [imsak, fajr, sunrise, dhuha, dhuhr, asr, maghrib, isha] = minutes.map(minutes_to_time);
        Timings { imsak, fajr, sunrise, dhuha, dhuhr, asr, maghrib, isha }
    }
}

/// Estimates timings with the default Asr convention and the region's own clock.
///
/// ```rust
/// use chrono::NaiveDate;
/// use waktu_astronomy::estimate_prayer_times;
/// use waktu_types::{CalculationMethod, GeoCoordinate, Prayer};
///
/// let jakarta = GeoCoordinate::new(-6.2088, 106.8456).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// let timings = estimate_prayer_times(jakarta, date, CalculationMethod::Kemenag);
/// println!("Maghrib {}", timings.format(Prayer::Maghrib));
/// ```
pub fn estimate_prayer_times(coords: GeoCoordinate, date: NaiveDate, method: CalculationMethod) -> Timings {
    LocalPrayerTimesCalculator::new(method).calculate(coords, date).timings
}

fn to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

fn clamp(minutes: i64, (lo, hi): (i64, i64)) -> i64 {
    minutes.clamp(lo, hi)
}

/// Forces a strictly increasing sequence with at least one minute between entries.
fn enforce_order(minutes: &mut [i64]) {
    for i in 1..minutes.len() {
        if minutes[i] <= minutes[i - 1] {
            minutes[i] = minutes[i - 1] + 1;
        }
    }
    for m in minutes.iter_mut() {
        *m = (*m).clamp(0, MINUTES_PER_DAY - 1);
    }
}

fn minutes_to_time(minutes: i64) -> NaiveTime {
    let clamped = minutes.clamp(0, MINUTES_PER_DAY - 1);
    NaiveTime::default() + Duration::minutes(clamped)
}
