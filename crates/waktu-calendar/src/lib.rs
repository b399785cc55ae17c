//! Hijri calendar conversion.
//!
//! Schedules carry the Hijri date alongside the Gregorian one. Conversion
//! is table-based (via `hijri_date`) and limited to Gregorian years
//! 1938-2076.

use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;

use waktu_types::{WaktuError, HIJRI_MAX_YEAR, HIJRI_MIN_YEAR};

/// A Hijri calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HijriDay {
    pub year: usize,
    pub month: usize,
    pub day: usize,
}

impl HijriDay {
    pub fn month_name(&self) -> &'static str {
        hijri_month_name(self.month)
    }
}

impl fmt::Display for HijriDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} H", self.day, self.month_name(), self.year)
    }
}

// Thread-local cache: (gregorian, adjustment) -> hijri day
thread_local! {
    static HIJRI_CACHE: RefCell<Option<(NaiveDate, i64, HijriDay)>> = const { RefCell::new(None) };
}

/// Converts Gregorian to Hijri with adjustment.
///
/// # Arguments
/// * `date` - Gregorian date
/// * `adjustment` - Day offset for local moon sighting (positive = Hijri ahead)
///
/// # Errors
/// Returns `DateOutOfRange` if outside 1938-2076.
pub fn to_hijri(date: NaiveDate, adjustment: i64) -> Result<HijriDay, WaktuError> {
    let cached = HIJRI_CACHE.with(|cache| {
        cache
            .borrow()
            .as_ref()
            .and_then(|(d, adj, h)| (*d == date && *adj == adjustment).then_some(*h))
    });
    if let Some(h) = cached {
        return Ok(h);
    }

    let adjusted = Duration::try_days(adjustment)
        .and_then(|shift| date.checked_add_signed(shift))
        .ok_or_else(|| WaktuError::date_out_of_range(date))?;

    if adjusted.year() < HIJRI_MIN_YEAR || adjusted.year() > HIJRI_MAX_YEAR {
        return Err(WaktuError::date_out_of_range(date));
    }

    let hijri = HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .map_err(|_| WaktuError::date_out_of_range(date))?;

    let day = HijriDay {
        year: hijri.year(),
        month: hijri.month(),
        day: hijri.day(),
    };

    HIJRI_CACHE.with(|cache| {
        *cache.borrow_mut() = Some((date, adjustment, day));
    });

    Ok(day)
}

/// Returns the Hijri month name as written on Indonesian calendars.
pub fn hijri_month_name(month: usize) -> &'static str {
    match month {
        1 => "Muharram",
        2 => "Safar",
        3 => "Rabiul Awal",
        4 => "Rabiul Akhir",
        5 => "Jumadil Awal",
        6 => "Jumadil Akhir",
        7 => "Rajab",
        8 => "Sya'ban",
        9 => "Ramadhan",
        10 => "Syawal",
        11 => "Dzulqa'dah",
        12 => "Dzulhijjah",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let h1 = to_hijri(date, 0).unwrap();
        let h2 = to_hijri(date, 0).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_adjustment_moves_one_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let base = to_hijri(date, 0).unwrap();
        let ahead = to_hijri(date, 1).unwrap();
        assert_ne!(base, ahead);
        assert_eq!(ahead, to_hijri(date + Duration::days(1), 0).unwrap());
    }

    #[test]
    fn test_ramadhan_1445() {
        // 1 Ramadhan 1445 fell around 11-12 March 2024 depending on sighting.
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let h = to_hijri(date, 0).unwrap();
        assert_eq!(h.year, 1445);
        assert_eq!(h.month, 9);
        assert_eq!(h.month_name(), "Ramadhan");
    }

    #[test]
    fn test_out_of_range_error() {
        let bad_date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let result = to_hijri(bad_date, 0);
        assert!(matches!(result, Err(WaktuError::DateOutOfRange { .. })));
    }

    #[test]
    fn test_huge_adjustment_is_out_of_range() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for adjustment in [i64::MAX, i64::MIN, 1_000_000_000] {
            assert!(matches!(to_hijri(date, adjustment), Err(WaktuError::DateOutOfRange { .. })));
        }
    }

    #[test]
    fn test_display() {
        let h = HijriDay { year: 1447, month: 9, day: 12 };
        assert_eq!(h.to_string(), "12 Ramadhan 1447 H");
    }
}
