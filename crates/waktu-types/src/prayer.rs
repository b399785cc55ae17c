use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A named time of day on the prayer schedule.
///
/// Ordered chronologically. Only five of these are obligatory prayers;
/// Imsak, Sunrise (Terbit) and Dhuha are schedule markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prayer {
    Imsak,
    Fajr,
    Sunrise,
    Dhuha,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// Every schedule entry in chronological order.
    pub const ALL: [Prayer; 8] = [
        Prayer::Imsak,
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuha,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// The five daily prayers.
    pub const OBLIGATORY: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn is_obligatory(&self) -> bool {
        matches!(self, Prayer::Fajr | Prayer::Dhuhr | Prayer::Asr | Prayer::Maghrib | Prayer::Isha)
    }

    /// Indonesian label as shown on local schedules.
    pub fn label_id(&self) -> &'static str {
        match self {
            Prayer::Imsak => "Imsak",
            Prayer::Fajr => "Subuh",
            Prayer::Sunrise => "Terbit",
            Prayer::Dhuha => "Dhuha",
            Prayer::Dhuhr => "Dzuhur",
            Prayer::Asr => "Ashar",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isya",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Prayer::Imsak => "Imsak",
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuha => "Dhuha",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        };
        write!(f, "{}", s)
    }
}

/// Local clock times for one day, one per [`Prayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    pub imsak: NaiveTime,
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuha: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
}

impl Timings {
    pub fn get(&self, prayer: Prayer) -> NaiveTime {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuha => self.dhuha,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// All entries in chronological order.
    pub fn entries(&self) -> SmallVec<[(Prayer, NaiveTime); 8]> {
        Prayer::ALL.iter().map(|&p| (p, self.get(p))).collect()
    }

    /// `HH:MM`, zero padded.
    pub fn format(&self, prayer: Prayer) -> String {
        format_hhmm(self.get(prayer))
    }

    pub fn to_strings(&self) -> SmallVec<[(Prayer, String); 8]> {
        Prayer::ALL.iter().map(|&p| (p, self.format(p))).collect()
    }

    /// True when every entry is strictly later than the one before it.
    pub fn is_ordered(&self) -> bool {
        self.entries().windows(2).all(|w| w[0].1 < w[1].1)
    }
}

/// Formats a time as zero-padded `HH:MM`.
pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Parses `HH:MM` (seconds are not accepted).
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn sample() -> Timings {
        Timings {
            imsak: t(4, 28),
            fajr: t(4, 38),
            sunrise: t(5, 55),
            dhuha: t(6, 10),
            dhuhr: t(11, 58),
            asr: t(15, 19),
            maghrib: t(17, 58),
            isha: t(19, 10),
        }
    }

    #[test]
    fn test_format_zero_padded() {
        assert_eq!(sample().format(Prayer::Fajr), "04:38");
        assert_eq!(format_hhmm(t(0, 5)), "00:05");
    }

    #[test]
    fn test_entries_are_chronological() {
        let timings = sample();
        assert!(timings.is_ordered());
        let names: Vec<Prayer> = timings.entries().iter().map(|(p, _)| *p).collect();
        assert_eq!(names, Prayer::ALL.to_vec());
    }

    #[test]
    fn test_obligatory() {
        assert!(Prayer::Maghrib.is_obligatory());
        assert!(!Prayer::Imsak.is_obligatory());
        assert!(!Prayer::Sunrise.is_obligatory());
        assert_eq!(Prayer::OBLIGATORY.iter().filter(|p| p.is_obligatory()).count(), 5);
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("04:38"), Some(t(4, 38)));
        assert_eq!(parse_hhmm(" 19:05 "), Some(t(19, 5)));
        assert_eq!(parse_hhmm("25:00"), None);
        assert_eq!(parse_hhmm("abc"), None);
    }
}
