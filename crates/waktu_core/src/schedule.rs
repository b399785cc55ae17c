//! A day's schedule as shown to the user, and the countdown to the next prayer.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use waktu_astronomy::{DailyTimes, LocalPrayerTimesCalculator};
use waktu_calendar::HijriDay;
use waktu_location::ResolvedLocation;
use waktu_types::Prayer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub location: ResolvedLocation,
    pub times: DailyTimes,
    /// `None` outside the convertible range.
    pub hijri: Option<HijriDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingPrayer {
    pub prayer: Prayer,
    /// Local clock of the schedule.
    pub at: NaiveDateTime,
    pub remaining: Duration,
}

impl UpcomingPrayer {
    /// Rounded up, so "in 0 minutes" only happens at the exact moment.
    pub fn remaining_minutes(&self) -> i64 {
        let secs = self.remaining.num_seconds();
        (secs + 59).div_euclid(60)
    }

    /// `"2 jam 5 menit"` style countdown.
    pub fn countdown_id(&self) -> String {
        let minutes = self.remaining_minutes();
        let (h, m) = (minutes / 60, minutes % 60);
        match (h, m) {
            (0, m) => format!("{m} menit"),
            (h, 0) => format!("{h} jam"),
            (h, m) => format!("{h} jam {m} menit"),
        }
    }
}

/// The schedule's local clock reading at `now`.
pub fn local_now(times: &DailyTimes, now: DateTime<Utc>) -> NaiveDateTime {
    (now + Duration::minutes(i64::from(times.utc_offset_minutes))).naive_utc()
}

/// First obligatory prayer strictly after `now`, rolling over to the next
/// day's Fajr once Isha has passed.
pub fn next_prayer(
    calculator: &LocalPrayerTimesCalculator,
    times: &DailyTimes,
    now: NaiveDateTime,
) -> Option<UpcomingPrayer> {
    let upcoming = |prayer: Prayer, at: NaiveDateTime| UpcomingPrayer {
        prayer,
        at,
        remaining: at - now,
    };

    if let Some(&prayer) = Prayer::OBLIGATORY.iter().find(|&&p| times.at(p) > now) {
        return Some(upcoming(prayer, times.at(prayer)));
    }

    let tomorrow = times.date.succ_opt()?;
    let next_day = calculator.calculate(times.coords, tomorrow);
    let fajr = next_day.at(Prayer::Fajr);
    (fajr > now).then(|| upcoming(Prayer::Fajr, fajr))
}
