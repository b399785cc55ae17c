//! WASM bindings for waktu.
//!
//! The browser owns GPS, storage and notifications; these bindings expose
//! the pure parts: estimation, city search, the location chain and the
//! tasbih counter.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use waktu_core::location::{
    resolve_location, CachedLocation, GpsOutcome, LocaleHints, LocationSource, ManualLocation, ResolvedLocation,
};
use waktu_core::schedule::{local_now, next_prayer};
use waktu_core::types::{AsrJuristic, CalculationMethod, GeoCoordinate, Prayer};
use waktu_core::{to_hijri, DailyTimes, IndonesianCitiesService, LocalPrayerTimesCalculator, TasbihCounter, WaktuError};

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_date(date_str: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| JsValue::from_str(&format!("Invalid date format: {}", e)))
}

fn calculator(method: Option<String>, hanafi: bool) -> Result<LocalPrayerTimesCalculator, JsValue> {
    let method = match method {
        Some(m) => m.parse::<CalculationMethod>().map_err(js_err)?,
        None => CalculationMethod::default(),
    };
    let asr = if hanafi { AsrJuristic::Hanafi } else { AsrJuristic::Standard };
    Ok(LocalPrayerTimesCalculator::new(method).asr_juristic(asr))
}

/// One day's schedule for `lat`/`lng` on `date_str` (YYYY-MM-DD).
///
/// # Example (JavaScript)
/// ```js
/// const t = prayerTimes(-6.2088, 106.8456, "2025-03-01", "kemenag", false);
/// console.log(t.maghrib, t.zone);
/// ```
#[wasm_bindgen(js_name = prayerTimes)]
pub fn prayer_times(
    lat: f64,
    lng: f64,
    date_str: &str,
    method: Option<String>,
    hanafi: Option<bool>,
) -> Result<WasmPrayerTimes, JsValue> {
    let coords = GeoCoordinate::new(lat, lng).map_err(js_err)?;
    let date = parse_date(date_str)?;
    let times = calculator(method, hanafi.unwrap_or(false))?.calculate(coords, date);
    Ok(WasmPrayerTimes::from(&times))
}

/// Ranked gazetteer matches.
#[wasm_bindgen(js_name = searchCities)]
pub fn search_cities(query: &str, limit: usize) -> Result<JsValue, JsValue> {
    let cities: Vec<WasmCity> = IndonesianCitiesService::new()
        .search(query, limit)
        .into_iter()
        .map(|hit| WasmCity::new(hit.city, hit.score))
        .collect();
    serde_wasm_bindgen::to_value(&cities).map_err(js_err)
}

/// Suggestions while typing; empty until two characters.
#[wasm_bindgen]
pub fn autocomplete(query: &str, limit: usize) -> Result<JsValue, JsValue> {
    let cities: Vec<WasmCity> = IndonesianCitiesService::new()
        .autocomplete(query, limit)
        .into_iter()
        .map(|s| WasmCity::new(s.city, s.score))
        .collect();
    serde_wasm_bindgen::to_value(&cities).map_err(js_err)
}

#[wasm_bindgen(js_name = popularCities)]
pub fn popular_cities() -> Result<JsValue, JsValue> {
    let cities: Vec<WasmCity> = IndonesianCitiesService::new()
        .popular()
        .into_iter()
        .map(|c| WasmCity::new(c, 0))
        .collect();
    serde_wasm_bindgen::to_value(&cities).map_err(js_err)
}

/// Hijri date as `"12 Ramadhan 1446 H"`.
#[wasm_bindgen(js_name = hijriDate)]
pub fn hijri_date(date_str: &str, adjustment: Option<i32>) -> Result<String, JsValue> {
    let date = parse_date(date_str)?;
    let hijri = to_hijri(date, i64::from(adjustment.unwrap_or(0))).map_err(js_err)?;
    Ok(hijri.to_string())
}

/// Everything the browser knows about position, as plain JSON.
///
/// ```js
/// resolveLocation({
///   cached: { lat: -6.9175, lng: 107.6191, label: "Bandung", cachedAtMs: saved },
///   gps: { status: "timeout" },
///   hints: { timezone: Intl.DateTimeFormat().resolvedOptions().timeZone, language: navigator.language },
///   nowMs: Date.now(),
/// });
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationInput {
    manual: Option<ManualInput>,
    cached: Option<CachedInput>,
    #[serde(default)]
    gps: GpsInput,
    #[serde(default)]
    hints: HintsInput,
    /// Milliseconds since the epoch (`Date.now()`).
    now_ms: i64,
    #[serde(default = "default_cache_hours")]
    max_cache_age_hours: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ManualInput {
    lat: f64,
    lng: f64,
    label: String,
    #[serde(default)]
    city_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CachedInput {
    lat: f64,
    lng: f64,
    #[serde(default)]
    label: Option<String>,
    cached_at_ms: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum GpsInput {
    #[serde(rename_all = "camelCase")]
    Fix {
        lat: f64,
        lng: f64,
        #[serde(default)]
        accuracy_m: Option<f64>,
    },
    PermissionDenied,
    Unavailable,
    Timeout,
    #[default]
    Skipped,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct HintsInput {
    timezone: Option<String>,
    language: Option<String>,
    utc_offset_minutes: Option<i32>,
}

fn default_cache_hours() -> i64 {
    24
}

fn cache_max_age(hours: i64) -> Option<Duration> {
    Duration::try_hours(hours).filter(|d| *d > Duration::zero())
}

fn timestamp(ms: i64, field: &str) -> Result<DateTime<Utc>, WaktuError> {
    DateTime::<Utc>::from_timestamp_millis(ms).ok_or_else(|| WaktuError::invalid_config(format!("{field} out of range")))
}

impl GpsInput {
    fn outcome(self) -> Result<GpsOutcome, WaktuError> {
        Ok(match self {
            GpsInput::Fix { lat, lng, accuracy_m } => GpsOutcome::Fix {
                coords: GeoCoordinate::new(lat, lng)?,
                accuracy_m,
            },
            GpsInput::PermissionDenied => GpsOutcome::PermissionDenied,
            GpsInput::Unavailable => GpsOutcome::Unavailable,
            GpsInput::Timeout => GpsOutcome::Timeout,
            GpsInput::Skipped => GpsOutcome::Skipped,
        })
    }
}

impl LocationInput {
    fn resolve(self) -> Result<ResolvedLocation, WaktuError> {
        let now = timestamp(self.now_ms, "nowMs")?;
        let max_age = cache_max_age(self.max_cache_age_hours)
            .ok_or_else(|| WaktuError::invalid_config("maxCacheAgeHours out of range"))?;
        let manual = self
            .manual
            .map(|m| {
                Ok::<_, WaktuError>(ManualLocation {
                    coords: GeoCoordinate::new(m.lat, m.lng)?,
                    label: m.label,
                    city_id: m.city_id,
                })
            })
            .transpose()?;
        let cached = self
            .cached
            .map(|c| {
                Ok::<_, WaktuError>(CachedLocation {
                    coords: GeoCoordinate::new(c.lat, c.lng)?,
                    label: c.label,
                    cached_at: timestamp(c.cached_at_ms, "cachedAtMs")?,
                    source: LocationSource::Gps,
                })
            })
            .transpose()?;
        let hints = LocaleHints {
            timezone: self.hints.timezone,
            language: self.hints.language,
            utc_offset_minutes: self.hints.utc_offset_minutes,
        };
        let gps = self.gps.outcome()?;
        Ok(resolve_location(manual.as_ref(), cached.as_ref(), &gps, &hints, now, max_age))
    }
}

/// Runs the location fallback chain over browser-supplied state.
///
/// Returns `{ lat, lng, label, source }`.
#[wasm_bindgen(js_name = resolveLocation)]
pub fn resolve(input: JsValue) -> Result<JsValue, JsValue> {
    let input: LocationInput = serde_wasm_bindgen::from_value(input).map_err(js_err)?;
    let resolved = input.resolve().map_err(js_err)?;
    serde_wasm_bindgen::to_value(&WasmResolved::from(resolved)).map_err(js_err)
}

/// Next obligatory prayer after `now_ms` at `lat`/`lng`.
#[wasm_bindgen(js_name = nextPrayer)]
pub fn next(lat: f64, lng: f64, now_ms: f64, method: Option<String>) -> Result<WasmUpcoming, JsValue> {
    let coords = GeoCoordinate::new(lat, lng).map_err(js_err)?;
    let now = DateTime::<Utc>::from_timestamp_millis(now_ms as i64).ok_or_else(|| js_err("nowMs out of range"))?;
    let calc = calculator(method, false)?;

    // The schedule's local date can differ from the UTC date.
    let utc_day = calc.calculate(coords, now.date_naive());
    let local = local_now(&utc_day, now);
    let times = calc.calculate(coords, local.date());
    let upcoming = next_prayer(&calc, &times, local).ok_or_else(|| js_err("no upcoming prayer"))?;
    Ok(WasmUpcoming {
        prayer: upcoming.prayer.to_string(),
        label: upcoming.prayer.label_id().to_string(),
        at: upcoming.at.format("%Y-%m-%dT%H:%M").to_string(),
        remaining_minutes: upcoming.remaining_minutes(),
        countdown: upcoming.countdown_id(),
    })
}

/// Digital tasbih backed by `localStorage` on the JS side.
///
/// # Example (JavaScript)
/// ```js
/// const t = Tasbih.fromJson(localStorage.getItem("waktu.tasbih"));
/// t.increment();
/// localStorage.setItem("waktu.tasbih", t.toJson());
/// ```
#[wasm_bindgen]
pub struct Tasbih {
    inner: TasbihCounter,
}

#[wasm_bindgen]
impl Tasbih {
    #[wasm_bindgen(constructor)]
    pub fn new(target: Option<u32>) -> Result<Tasbih, JsValue> {
        let inner = match target {
            Some(t) => TasbihCounter::with_target(t).map_err(js_err)?,
            None => TasbihCounter::new(),
        };
        Ok(Tasbih { inner })
    }

    /// Restores a saved counter; anything unreadable starts fresh.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: Option<String>) -> Tasbih {
        let inner = json
            .and_then(|s| serde_json::from_str::<TasbihCounter>(&s).ok())
            .filter(|c| c.target() > 0)
            .unwrap_or_default();
        Tasbih { inner }
    }

    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner).map_err(js_err)
    }

    /// Returns true when the tap completed a round.
    pub fn increment(&mut self) -> bool {
        self.inner.increment().round_completed
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u32 {
        self.inner.count()
    }

    #[wasm_bindgen(getter)]
    pub fn target(&self) -> u32 {
        self.inner.target()
    }

    #[wasm_bindgen(getter)]
    pub fn rounds(&self) -> u32 {
        self.inner.rounds()
    }

    #[wasm_bindgen(getter)]
    pub fn phrase(&self) -> String {
        self.inner.phrase().to_string()
    }
}

/// WASM-friendly schedule for TypeScript generation.
#[derive(Debug, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmPrayerTimes {
    pub date: String,
    pub imsak: String,
    pub fajr: String,
    pub sunrise: String,
    pub dhuha: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub utc_offset_minutes: i32,
    pub region: String,
    pub zone: String,
    pub method: String,
}

impl From<&DailyTimes> for WasmPrayerTimes {
    fn from(t: &DailyTimes) -> Self {
        Self {
            date: t.date.format("%Y-%m-%d").to_string(),
            imsak: t.format(Prayer::Imsak),
            fajr: t.format(Prayer::Fajr),
            sunrise: t.format(Prayer::Sunrise),
            dhuha: t.format(Prayer::Dhuha),
            dhuhr: t.format(Prayer::Dhuhr),
            asr: t.format(Prayer::Asr),
            maghrib: t.format(Prayer::Maghrib),
            isha: t.format(Prayer::Isha),
            utc_offset_minutes: t.utc_offset_minutes,
            region: format!("{:?}", t.region),
            zone: t
                .region
                .zone_abbreviation()
                .map(str::to_string)
                .unwrap_or_else(|| utc_label(t.utc_offset_minutes)),
            method: t.method.id().to_string(),
        }
    }
}

fn utc_label(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let m = minutes.abs();
    if m % 60 == 0 {
        format!("UTC{sign}{}", m / 60)
    } else {
        format!("UTC{sign}{}:{:02}", m / 60, m % 60)
    }
}

#[derive(Debug, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmCity {
    pub id: String,
    pub name: String,
    pub province: String,
    pub label: String,
    pub lat: f64,
    pub lng: f64,
    pub zone: String,
    pub score: u32,
}

impl WasmCity {
    fn new(city: &waktu_core::cities::City, score: u32) -> Self {
        Self {
            id: city.id.to_string(),
            name: city.name.to_string(),
            province: city.province.to_string(),
            label: city.label(),
            lat: city.coords.lat,
            lng: city.coords.lng,
            zone: city.zone.to_string(),
            score,
        }
    }
}

#[derive(Debug, Serialize, tsify::Tsify)]
#[serde(rename_all = "camelCase")]
pub struct WasmResolved {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    /// `"manual"`, `"cache"`, `"gps"`, `"staleCache"`, `"timezoneHint"`, ...
    pub source: String,
}

impl From<ResolvedLocation> for WasmResolved {
    fn from(r: ResolvedLocation) -> Self {
        let source = format!("{:?}", r.source);
        let mut chars = source.chars();
        let source = match chars.next() {
            Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
            None => source,
        };
        Self {
            lat: r.coords.lat,
            lng: r.coords.lng,
            label: r.label,
            source,
        }
    }
}

#[derive(Debug, Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct WasmUpcoming {
    pub prayer: String,
    pub label: String,
    pub at: String,
    pub remaining_minutes: i64,
    pub countdown: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_max_age_bounds() {
        assert_eq!(cache_max_age(24), Some(Duration::hours(24)));
        assert_eq!(cache_max_age(0), None);
        assert_eq!(cache_max_age(-1), None);
        assert_eq!(cache_max_age(i64::MAX), None);
    }

    fn input(value: serde_json::Value) -> LocationInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_resolve_reads_camel_case_records() {
        let now_ms: i64 = 1_740_830_400_000; // 2025-03-01T12:00:00Z
        let r = input(serde_json::json!({
            "cached": { "lat": -6.9175, "lng": 107.6191, "label": "Bandung", "cachedAtMs": now_ms - 3_600_000 },
            "gps": { "status": "fix", "lat": -7.25, "lng": 112.75, "accuracyM": 20.0 },
            "hints": { "utcOffsetMinutes": 540 },
            "nowMs": now_ms,
        }))
        .resolve()
        .unwrap();
        assert_eq!(r.label, "Bandung");
        assert_eq!(r.source, LocationSource::Cache);

        let r = input(serde_json::json!({
            "manual": { "lat": -7.7956, "lng": 110.3695, "label": "Yogyakarta", "cityId": "yogyakarta" },
            "nowMs": now_ms,
        }))
        .resolve()
        .unwrap();
        assert_eq!(WasmResolved::from(r).source, "manual");

        let r = input(serde_json::json!({ "gps": { "status": "timeout" }, "hints": { "utcOffsetMinutes": 540 }, "nowMs": now_ms }))
            .resolve()
            .unwrap();
        assert_eq!(WasmResolved::from(r).source, "offsetHint");
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        let bad_age = input(serde_json::json!({ "nowMs": 0, "maxCacheAgeHours": i64::MAX }));
        assert!(bad_age.resolve().is_err());
        let bad_fix = input(serde_json::json!({ "gps": { "status": "fix", "lat": 91.0, "lng": 0.0 }, "nowMs": 0 }));
        assert!(matches!(bad_fix.resolve(), Err(WaktuError::InvalidCoordinates { .. })));
    }

    #[test]
    fn test_utc_label() {
        assert_eq!(utc_label(420), "UTC+7");
        assert_eq!(utc_label(330), "UTC+5:30");
        assert_eq!(utc_label(-210), "UTC-3:30");
    }
}
