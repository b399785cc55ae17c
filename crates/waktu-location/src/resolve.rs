//! The location fallback chain.
//!
//! `resolve_location` never fails: every branch ends in a preset, so the
//! app always has *some* coordinates to compute a schedule for.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use waktu_types::GeoCoordinate;

use crate::gps::GpsOutcome;

/// Where a resolved location came from, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationSource {
    Manual,
    Cache,
    Gps,
    StaleCache,
    TimezoneHint,
    OffsetHint,
    LanguageHint,
    Preset,
}

impl LocationSource {
    /// True when the position reflects where the user actually is (or chose to be).
    pub fn is_precise(&self) -> bool {
        matches!(self, Self::Manual | Self::Cache | Self::Gps | Self::StaleCache)
    }
}

impl fmt::Display for LocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Manual => "manual",
            Self::Cache => "cache",
            Self::Gps => "gps",
            Self::StaleCache => "stale-cache",
            Self::TimezoneHint => "timezone",
            Self::OffsetHint => "utc-offset",
            Self::LanguageHint => "language",
            Self::Preset => "preset",
        };
        f.write_str(s)
    }
}

/// A user-chosen location that overrides everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualLocation {
    pub coords: GeoCoordinate,
    pub label: String,
    /// Gazetteer id when chosen from the city list.
    #[serde(default)]
    pub city_id: Option<String>,
}

/// The last known position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLocation {
    pub coords: GeoCoordinate,
    #[serde(default)]
    pub label: Option<String>,
    pub cached_at: DateTime<Utc>,
    pub source: LocationSource,
}

impl CachedLocation {
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        // a timestamp from the future (clock changed) counts as fresh
        now.signed_duration_since(self.cached_at) < max_age
    }
}

/// Environment signals used when no position is known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleHints {
    /// IANA zone, e.g. `"Asia/Makassar"`.
    pub timezone: Option<String>,
    /// BCP 47 tag, e.g. `"id-ID"`.
    pub language: Option<String>,
    pub utc_offset_minutes: Option<i32>,
}

impl LocaleHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = Some(lang.into());
        self
    }

    pub fn utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }
}

/// Outcome of the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub coords: GeoCoordinate,
    pub label: String,
    pub source: LocationSource,
}

/// A named fallback position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub coords: GeoCoordinate,
}

const fn preset(label: &'static str, lat: f64, lng: f64) -> Preset {
    Preset {
        label,
        coords: GeoCoordinate::new_unchecked(lat, lng),
    }
}

/// Last resort for every chain.
pub const DEFAULT_PRESET: Preset = preset("Jakarta", -6.2088, 106.8456);

const PONTIANAK: Preset = preset("Pontianak", -0.0263, 109.3425);
const MAKASSAR: Preset = preset("Makassar", -5.1477, 119.4327);
const JAYAPURA: Preset = preset("Jayapura", -2.5337, 140.7181);
const KUALA_LUMPUR: Preset = preset("Kuala Lumpur", 3.139, 101.6869);
const KUCHING: Preset = preset("Kuching", 1.5535, 110.3593);
const SINGAPORE: Preset = preset("Singapore", 1.3521, 103.8198);
const BANDAR_SERI_BEGAWAN: Preset = preset("Bandar Seri Begawan", 4.9031, 114.9398);
const MECCA: Preset = preset("Mecca", 21.4225, 39.8262);
const RIYADH: Preset = preset("Riyadh", 24.7136, 46.6753);
const DUBAI: Preset = preset("Dubai", 25.2048, 55.2708);
const CAIRO: Preset = preset("Cairo", 30.0444, 31.2357);
const ISTANBUL: Preset = preset("Istanbul", 41.0082, 28.9784);
const KARACHI: Preset = preset("Karachi", 24.8607, 67.0011);
const DELHI: Preset = preset("New Delhi", 28.6139, 77.209);
const DHAKA: Preset = preset("Dhaka", 23.8103, 90.4125);
const LONDON: Preset = preset("London", 51.5074, -0.1278);

/// Preset for an IANA zone name.
pub fn timezone_preset(tz: &str) -> Option<Preset> {
    let p = match tz.trim() {
        "Asia/Jakarta" => DEFAULT_PRESET,
        "Asia/Pontianak" => PONTIANAK,
        "Asia/Makassar" | "Asia/Ujung_Pandang" => MAKASSAR,
        "Asia/Jayapura" => JAYAPURA,
        "Asia/Kuala_Lumpur" => KUALA_LUMPUR,
        "Asia/Kuching" => KUCHING,
        "Asia/Singapore" | "Singapore" => SINGAPORE,
        "Asia/Brunei" => BANDAR_SERI_BEGAWAN,
        "Asia/Riyadh" => RIYADH,
        "Asia/Dubai" | "Asia/Muscat" => DUBAI,
        "Africa/Cairo" | "Egypt" => CAIRO,
        "Europe/Istanbul" | "Asia/Istanbul" | "Turkey" => ISTANBUL,
        "Asia/Karachi" => KARACHI,
        "Asia/Kolkata" | "Asia/Calcutta" => DELHI,
        "Asia/Dhaka" | "Asia/Dacca" => DHAKA,
        "Europe/London" => LONDON,
        _ => return None,
    };
    Some(p)
}

/// Preset for a UTC offset. Only the Indonesian zones are unambiguous enough.
pub fn offset_preset(minutes: i32) -> Option<Preset> {
    match minutes {
        420 => Some(DEFAULT_PRESET),
        480 => Some(MAKASSAR),
        540 => Some(JAYAPURA),
        _ => None,
    }
}

/// Preset for the primary subtag of a language tag.
pub fn language_preset(tag: &str) -> Option<Preset> {
    let primary = tag.split(['-', '_']).next().unwrap_or_default().to_ascii_lowercase();
    let p = match primary.as_str() {
        "id" | "in" | "jv" | "su" => DEFAULT_PRESET,
        "ms" => KUALA_LUMPUR,
        "ar" => MECCA,
        "tr" => ISTANBUL,
        "ur" => KARACHI,
        "bn" => DHAKA,
        _ => return None,
    };
    Some(p)
}

fn from_preset(p: Preset, source: LocationSource) -> ResolvedLocation {
    ResolvedLocation {
        coords: p.coords,
        label: p.label.to_string(),
        source,
    }
}

fn cached_label(cached: &CachedLocation) -> String {
    cached.label.clone().unwrap_or_else(|| cached.coords.to_string())
}

/// Picks the best available location.
///
/// Order: manual override, fresh cache, GPS fix, stale cache, timezone,
/// UTC offset, language, then Jakarta.
pub fn resolve_location(
    manual: Option<&ManualLocation>,
    cached: Option<&CachedLocation>,
    gps: &GpsOutcome,
    hints: &LocaleHints,
    now: DateTime<Utc>,
    max_cache_age: Duration,
) -> ResolvedLocation {
    let resolved = resolve_inner(manual, cached, gps, hints, now, max_cache_age);
    debug!(source = %resolved.source, label = %resolved.label, coords = %resolved.coords, "location resolved");
    resolved
}

fn resolve_inner(
    manual: Option<&ManualLocation>,
    cached: Option<&CachedLocation>,
    gps: &GpsOutcome,
    hints: &LocaleHints,
    now: DateTime<Utc>,
    max_cache_age: Duration,
) -> ResolvedLocation {
    if let Some(m) = manual {
        return ResolvedLocation {
            coords: m.coords,
            label: m.label.clone(),
            source: LocationSource::Manual,
        };
    }

    if let Some(c) = cached.filter(|c| c.is_fresh(now, max_cache_age)) {
        return ResolvedLocation {
            coords: c.coords,
            label: cached_label(c),
            source: LocationSource::Cache,
        };
    }

    if let GpsOutcome::Fix { coords, .. } = gps {
        return ResolvedLocation {
            coords: *coords,
            label: coords.to_string(),
            source: LocationSource::Gps,
        };
    }

    if let Some(c) = cached {
        return ResolvedLocation {
            coords: c.coords,
            label: cached_label(c),
            source: LocationSource::StaleCache,
        };
    }

    if let Some(p) = hints.timezone.as_deref().and_then(timezone_preset) {
        return from_preset(p, LocationSource::TimezoneHint);
    }
    if let Some(p) = hints.utc_offset_minutes.and_then(offset_preset) {
        return from_preset(p, LocationSource::OffsetHint);
    }
    if let Some(p) = hints.language.as_deref().and_then(language_preset) {
        return from_preset(p, LocationSource::LanguageHint);
    }

    from_preset(DEFAULT_PRESET, LocationSource::Preset)
}
