//! Regional anchor tables.
//!
//! Each region carries the local clock times, in decimal hours, of every
//! prayer at a reference city on an equinox day with the equation of time
//! removed, under the 20°/18° twilight convention and standard Asr.
//! [`crate::prayer`] corrects those anchors for the observer's position,
//! the season and the chosen method.

use serde::{Deserialize, Serialize};
use std::fmt;

use waktu_types::GeoCoordinate;

/// Anchor times for a reference point, in local decimal hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseTimes {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl BaseTimes {
    const fn new(fajr: f64, sunrise: f64, dhuhr: f64, asr: f64, maghrib: f64, isha: f64) -> Self {
        Self { fajr, sunrise, dhuhr, asr, maghrib, isha }
    }

    fn shifted(&self, hours: f64) -> Self {
        Self {
            fajr: self.fajr + hours,
            sunrise: self.sunrise + hours,
            dhuhr: self.dhuhr + hours,
            asr: self.asr + hours,
            maghrib: self.maghrib + hours,
            isha: self.isha + hours,
        }
    }
}

/// Geographic bucket that selects an anchor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Western Indonesia, UTC+7 (Sumatra, Java, West/Central Kalimantan).
    IndonesiaWib,
    /// Central Indonesia, UTC+8 (Bali, Nusa Tenggara, Sulawesi, East/South Kalimantan).
    IndonesiaWita,
    /// Eastern Indonesia, UTC+9 (Maluku, Papua).
    IndonesiaWit,
    /// Malaysia, Singapore and Brunei, UTC+8.
    MalaysiaSingapore,
    ArabianPeninsula,
    Gulf,
    Turkey,
    Egypt,
    Pakistan,
    India,
    Bangladesh,
    /// Anywhere else. The UTC offset is derived from longitude.
    Global,
}

/// A resolved region with its concrete anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    pub region: Region,
    pub reference: GeoCoordinate,
    pub utc_offset_minutes: i32,
    pub base: BaseTimes,
}

struct RegionRow {
    region: Region,
    reference: GeoCoordinate,
    utc_offset_minutes: i32,
    base: BaseTimes,
}

const REGION_TABLE: &[RegionRow] = &[
    RegionRow {
        region: Region::IndonesiaWib,
        reference: GeoCoordinate::new_unchecked(-6.2088, 106.8456),
        utc_offset_minutes: 420,
        base: BaseTimes::new(4.535, 5.821, 11.877, 15.053, 17.933, 19.084),
    },
    RegionRow {
        region: Region::IndonesiaWita,
        reference: GeoCoordinate::new_unchecked(-5.1477, 119.4327),
        utc_offset_minutes: 480,
        base: BaseTimes::new(4.699, 5.982, 12.038, 15.188, 18.094, 19.243),
    },
    RegionRow {
        region: Region::IndonesiaWit,
        reference: GeoCoordinate::new_unchecked(-2.5337, 140.7181),
        utc_offset_minutes: 540,
        base: BaseTimes::new(4.284, 5.563, 11.619, 14.698, 17.674, 18.820),
    },
    RegionRow {
        region: Region::MalaysiaSingapore,
        reference: GeoCoordinate::new_unchecked(3.1390, 101.6869),
        utc_offset_minutes: 480,
        base: BaseTimes::new(5.885, 7.165, 13.221, 16.317, 19.276, 20.423),
    },
    RegionRow {
        region: Region::ArabianPeninsula,
        reference: GeoCoordinate::new_unchecked(21.4225, 39.8262),
        utc_offset_minutes: 180,
        base: BaseTimes::new(4.908, 6.285, 12.345, 15.758, 18.405, 19.637),
    },
    RegionRow {
        region: Region::Gulf,
        reference: GeoCoordinate::new_unchecked(25.2048, 55.2708),
        utc_offset_minutes: 240,
        base: BaseTimes::new(4.835, 6.254, 12.315, 15.754, 18.377, 19.647),
    },
    RegionRow {
        region: Region::Turkey,
        reference: GeoCoordinate::new_unchecked(39.9334, 32.8597),
        utc_offset_minutes: 180,
        base: BaseTimes::new(5.043, 6.737, 12.809, 16.238, 18.882, 20.394),
    },
    RegionRow {
        region: Region::Egypt,
        reference: GeoCoordinate::new_unchecked(30.0444, 31.2357),
        utc_offset_minutes: 120,
        base: BaseTimes::new(4.366, 5.853, 11.918, 15.372, 17.982, 19.312),
    },
    RegionRow {
        region: Region::Pakistan,
        reference: GeoCoordinate::new_unchecked(24.8607, 67.0011),
        utc_offset_minutes: 300,
        base: BaseTimes::new(5.057, 6.472, 12.533, 15.970, 18.594, 19.861),
    },
    RegionRow {
        region: Region::India,
        reference: GeoCoordinate::new_unchecked(28.6139, 77.2090),
        utc_offset_minutes: 330,
        base: BaseTimes::new(4.824, 6.289, 12.353, 15.804, 18.416, 19.727),
    },
    RegionRow {
        region: Region::Bangladesh,
        reference: GeoCoordinate::new_unchecked(23.8103, 90.4125),
        utc_offset_minutes: 360,
        base: BaseTimes::new(4.509, 5.912, 11.973, 15.403, 18.033, 19.289),
    },
];

/// Anchors at the equator on the Greenwich meridian, UTC+0.
const GLOBAL_BASE: BaseTimes = BaseTimes::new(4.667, 5.944, 12.000, 15.000, 18.056, 19.200);

impl Region {
    /// Picks the region containing `coords`.
    pub fn locate(coords: GeoCoordinate) -> Region {
        let (lat, lng) = (coords.lat, coords.lng);

        if is_peninsular_malaysia(lat, lng) || is_north_borneo(lat, lng) {
            return Region::MalaysiaSingapore;
        }
        if (-11.5..=6.5).contains(&lat) && (94.5..=141.1).contains(&lng) {
            // South Kalimantan reaches west of the Java/Bali zone line.
            let south_kalimantan = (-4.5..=4.5).contains(&lat) && lng >= 114.3;
            return if lng < 114.8 && !south_kalimantan {
                Region::IndonesiaWib
            } else if lng < 125.5 {
                Region::IndonesiaWita
            } else {
                Region::IndonesiaWit
            };
        }
        if (12.0..=32.5).contains(&lat) && (34.5..=60.0).contains(&lng) {
            return if lng >= 52.0 && lat < 27.0 { Region::Gulf } else { Region::ArabianPeninsula };
        }
        if (35.8..=42.2).contains(&lat) && (25.9..=44.9).contains(&lng) {
            return Region::Turkey;
        }
        if (22.0..=31.7).contains(&lat) && (24.7..=34.9).contains(&lng) {
            return Region::Egypt;
        }
        if (20.6..=26.7).contains(&lat) && (88.0..=92.7).contains(&lng) {
            return Region::Bangladesh;
        }
        if (23.5..=37.1).contains(&lat) && (60.8..=77.9).contains(&lng) && (lng < 71.0 || (lat >= 30.0 && lng < 74.6)) {
            return Region::Pakistan;
        }
        if (6.0..=35.7).contains(&lat) && (68.0..=97.5).contains(&lng) {
            return Region::India;
        }
        Region::Global
    }

    /// Anchors for this region. `Global` needs the longitude to pick its meridian.
    pub fn profile(&self, lng: f64) -> RegionProfile {
        if let Some(row) = REGION_TABLE.iter().find(|r| r.region == *self) {
            return RegionProfile {
                region: row.region,
                reference: row.reference,
                utc_offset_minutes: row.utc_offset_minutes,
                base: row.base,
            };
        }

        let offset_hours = (lng / 15.0).round().clamp(-12.0, 14.0);
        RegionProfile {
            region: Region::Global,
            reference: GeoCoordinate::new_unchecked(0.0, offset_hours * 15.0),
            utc_offset_minutes: (offset_hours * 60.0) as i32,
            base: GLOBAL_BASE,
        }
    }

    pub fn is_indonesia(&self) -> bool {
        matches!(self, Region::IndonesiaWib | Region::IndonesiaWita | Region::IndonesiaWit)
    }

    /// Indonesian zone abbreviation, if any.
    pub fn zone_abbreviation(&self) -> Option<&'static str> {
        match self {
            Region::IndonesiaWib => Some("WIB"),
            Region::IndonesiaWita => Some("WITA"),
            Region::IndonesiaWit => Some("WIT"),
            _ => None,
        }
    }
}

impl RegionProfile {
    /// Anchors re-expressed on another clock. Used when the caller knows
    /// the observer's actual UTC offset.
    pub fn with_utc_offset(mut self, utc_offset_minutes: i32) -> Self {
        let shift = f64::from(utc_offset_minutes - self.utc_offset_minutes) / 60.0;
        self.base = self.base.shifted(shift);
        self.utc_offset_minutes = utc_offset_minutes;
        self
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Region::IndonesiaWib => "Indonesia (WIB)",
            Region::IndonesiaWita => "Indonesia (WITA)",
            Region::IndonesiaWit => "Indonesia (WIT)",
            Region::MalaysiaSingapore => "Malaysia / Singapore / Brunei",
            Region::ArabianPeninsula => "Arabian Peninsula",
            Region::Gulf => "Gulf",
            Region::Turkey => "Turkey",
            Region::Egypt => "Egypt",
            Region::Pakistan => "Pakistan",
            Region::India => "India",
            Region::Bangladesh => "Bangladesh",
            Region::Global => "Global",
        };
        write!(f, "{}", s)
    }
}

fn is_peninsular_malaysia(lat: f64, lng: f64) -> bool {
    (1.2..=6.8).contains(&lat) && (100.1..=104.6).contains(&lng) && !(lat < 2.1 && lng < 103.0)
}

/// Sarawak, Sabah and Brunei: north of the Kalimantan border.
fn is_north_borneo(lat: f64, lng: f64) -> bool {
    if !(109.6..=119.3).contains(&lng) || !(0.8..=7.5).contains(&lat) {
        return false;
    }
    let border = if lng < 112.0 {
        1.0 + (lng - 109.6) * 0.2
    } else if lng < 115.5 {
        1.5 + (lng - 112.0) * 0.8
    } else {
        4.2
    };
    lat > border
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Region {
        Region::locate(GeoCoordinate::new_unchecked(lat, lng))
    }

    #[test]
    fn test_indonesian_zones() {
        assert_eq!(at(-6.2088, 106.8456), Region::IndonesiaWib); // Jakarta
        assert_eq!(at(3.5952, 98.6722), Region::IndonesiaWib); // Medan
        assert_eq!(at(1.6692, 101.4478), Region::IndonesiaWib); // Dumai
        assert_eq!(at(-0.0263, 109.3425), Region::IndonesiaWib); // Pontianak
        assert_eq!(at(-8.2192, 114.3691), Region::IndonesiaWib); // Banyuwangi
        assert_eq!(at(-3.3186, 114.5944), Region::IndonesiaWita); // Banjarmasin
        assert_eq!(at(-8.6705, 115.2126), Region::IndonesiaWita); // Denpasar
        assert_eq!(at(1.4748, 124.8421), Region::IndonesiaWita); // Manado
        assert_eq!(at(4.1372, 117.6663), Region::IndonesiaWita); // Nunukan
        assert_eq!(at(-3.6954, 128.1814), Region::IndonesiaWit); // Ambon
        assert_eq!(at(-2.5337, 140.7181), Region::IndonesiaWit); // Jayapura
    }

    #[test]
    fn test_malaysia_singapore() {
        assert_eq!(at(1.3521, 103.8198), Region::MalaysiaSingapore); // Singapore
        assert_eq!(at(3.1390, 101.6869), Region::MalaysiaSingapore); // Kuala Lumpur
        assert_eq!(at(1.5535, 110.3593), Region::MalaysiaSingapore); // Kuching
        assert_eq!(at(4.2447, 117.8912), Region::MalaysiaSingapore); // Tawau
        assert_eq!(at(4.9031, 114.9398), Region::MalaysiaSingapore); // Bandar Seri Begawan
        assert_eq!(at(1.0456, 104.0305), Region::IndonesiaWib); // Batam
    }

    #[test]
    fn test_other_regions() {
        assert_eq!(at(21.4225, 39.8262), Region::ArabianPeninsula);
        assert_eq!(at(25.2048, 55.2708), Region::Gulf);
        assert_eq!(at(25.2854, 51.5310), Region::ArabianPeninsula); // Doha
        assert_eq!(at(41.0082, 28.9784), Region::Turkey);
        assert_eq!(at(30.0444, 31.2357), Region::Egypt);
        assert_eq!(at(31.5204, 74.3587), Region::Pakistan); // Lahore
        assert_eq!(at(31.6340, 74.8723), Region::India); // Amritsar
        assert_eq!(at(19.0760, 72.8777), Region::India); // Mumbai
        assert_eq!(at(23.8103, 90.4125), Region::Bangladesh);
        assert_eq!(at(51.5074, -0.1278), Region::Global);
    }

    #[test]
    fn test_global_profile_uses_longitude_offset() {
        let p = Region::Global.profile(-74.0);
        assert_eq!(p.utc_offset_minutes, -300);
        assert_eq!(p.reference.lng, -75.0);
        let p = Region::Global.profile(13.4);
        assert_eq!(p.utc_offset_minutes, 60);
    }

    #[test]
    fn test_with_utc_offset_shifts_anchors() {
        let p = Region::IndonesiaWib.profile(106.8);
        let shifted = p.with_utc_offset(480);
        assert_eq!(shifted.utc_offset_minutes, 480);
        assert!((shifted.base.dhuhr - p.base.dhuhr - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zone_abbreviation() {
        assert_eq!(Region::IndonesiaWita.zone_abbreviation(), Some("WITA"));
        assert!(Region::Global.zone_abbreviation().is_none());
        assert!(Region::IndonesiaWit.is_indonesia());
    }
}
