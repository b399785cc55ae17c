//! The app-facing prayer times service.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::{debug, info};

use waktu_astronomy::{DailyTimes, LocalPrayerTimesCalculator};
use waktu_calendar::to_hijri;
use waktu_cities::IndonesianCitiesService;
use waktu_location::{
    CachedLocation, GpsOutcome, GpsProvider, JsonFileStore, KeyValueStore, LocaleHints, LocationCache,
    LocationSource, ManualLocation, NoGps, PermissionState, PermissionTracker, ResolvedLocation, resolve_location,
};
use waktu_notify::{Reminder, plan_reminders};
use waktu_types::{GeoCoordinate, WaktuError};

use crate::config::Config;
use crate::schedule::{PrayerSchedule, UpcomingPrayer, local_now, next_prayer};
use crate::tasbih::TasbihCounter;

/// GPS fixes within this distance of a gazetteer city take its name.
const CITY_LABEL_RADIUS_KM: f64 = 25.0;

/// Location-aware schedules: resolves where the user is, estimates the
/// day's times offline and optionally cross-checks them remotely.
pub struct PrayerTimesService<G: GpsProvider = NoGps> {
    config: Config,
    calculator: LocalPrayerTimesCalculator,
    cities: IndonesianCitiesService,
    cache: LocationCache,
    gps: G,
    permission: PermissionTracker,
    hints: LocaleHints,
    #[cfg(feature = "remote")]
    remote: Option<crate::remote::RemoteCheck>,
}

impl<G: GpsProvider> std::fmt::Debug for PrayerTimesService<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrayerTimesService")
            .field("calculator", &self.calculator)
            .field("permission", &self.permission)
            .field("hints", &self.hints)
            .finish_non_exhaustive()
    }
}

impl PrayerTimesService<NoGps> {
    /// Service over the configured JSON store, without live GPS.
    ///
    /// # Errors
    /// Invalid configuration or an unreadable store file.
    pub fn from_config(config: Config) -> Result<Self, WaktuError> {
        let store = JsonFileStore::open(config.store_path())?;
        Self::new(config, Arc::new(store), NoGps)
    }
}

impl<G: GpsProvider> PrayerTimesService<G> {
    /// # Errors
    /// `InvalidConfiguration` when `config` does not validate.
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>, gps: G) -> Result<Self, WaktuError> {
        config.validate()?;
        let calculator = config.calculator()?;
        let permission = PermissionTracker::new().zero_gps(config.location.zero_gps);
        let hints = config.hints(LocaleHints::default());

        #[cfg(feature = "remote")]
        let remote = crate::remote::RemoteCheck::from_config(&config.remote)?;

        Ok(Self {
            config,
            calculator,
            cities: IndonesianCitiesService::new(),
            cache: LocationCache::new(store),
            gps,
            permission,
            hints,
            #[cfg(feature = "remote")]
            remote,
        })
    }

    /// Replaces the locale hints (configured values still win).
    pub fn hints(mut self, detected: LocaleHints) -> Self {
        self.hints = self.config.hints(detected);
        self
    }

    /// Hints from `TZ`, `LANG` and the system clock's offset.
    pub fn with_system_hints(self) -> Self {
        let detected = LocaleHints {
            timezone: std::env::var("TZ").ok().filter(|s| !s.is_empty()),
            language: std::env::var("LANG").ok().filter(|s| !s.is_empty() && s != "C" && s != "POSIX"),
            utc_offset_minutes: Some(Local::now().offset().local_minus_utc() / 60),
        };
        self.hints(detected)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn calculator(&self) -> &LocalPrayerTimesCalculator {
        &self.calculator
    }

    pub fn cities(&self) -> &IndonesianCitiesService {
        &self.cities
    }

    pub fn permission_state(&self) -> PermissionState {
        self.permission.state()
    }

    pub fn set_zero_gps(&mut self, enabled: bool) {
        self.permission.set_zero_gps(enabled);
    }

    /// Forget a previous denial, e.g. after the user re-enabled location.
    pub fn reset_permission(&mut self) {
        self.permission.reset();
    }

    /// Walks the location chain, asking GPS only when it can change the answer.
    pub async fn current_location(&mut self, now: DateTime<Utc>) -> Result<ResolvedLocation, WaktuError> {
        let manual = self.cache.manual()?;
        let cached = self.cache.cached()?;
        let max_age = self.config.cache_max_age();

        let settled = manual.is_some() || cached.as_ref().is_some_and(|c| c.is_fresh(now, max_age));
        let gps = if settled || !self.permission.should_attempt_gps() {
            GpsOutcome::Skipped
        } else {
            self.gps.locate().await
        };
        self.permission.record(&gps);

        let mut resolved = resolve_location(manual.as_ref(), cached.as_ref(), &gps, &self.hints, now, max_age);

        if resolved.source == LocationSource::Gps {
            if let Some(label) = self.label_for(resolved.coords) {
                resolved.label = label;
            }
            self.cache.set_cached(&CachedLocation {
                coords: resolved.coords,
                label: Some(resolved.label.clone()),
                cached_at: now,
                source: LocationSource::Gps,
            })?;
        }
        Ok(resolved)
    }

    fn label_for(&self, coords: GeoCoordinate) -> Option<String> {
        self.cities
            .nearest(coords)
            .filter(|(_, km)| *km <= CITY_LABEL_RADIUS_KM)
            .map(|(city, _)| city.label())
    }

    /// Pins the location to a gazetteer city.
    ///
    /// # Errors
    /// `CityNotFound` when nothing matches `name`.
    pub fn set_manual_city(&mut self, name: &str) -> Result<ManualLocation, WaktuError> {
        let city = self.cities.resolve(name)?;
        let manual = ManualLocation {
            coords: city.coords,
            label: city.label(),
            city_id: Some(city.id.to_string()),
        };
        self.cache.set_manual(&manual)?;
        info!(city = city.id, "manual location set");
        Ok(manual)
    }

    /// Pins the location to arbitrary coordinates.
    ///
    /// # Errors
    /// `InvalidCoordinates` for out-of-range input.
    pub fn set_manual_location(&mut self, coords: GeoCoordinate, label: &str) -> Result<ManualLocation, WaktuError> {
        let coords = GeoCoordinate::new(coords.lat, coords.lng)?;
        let label = match label.trim() {
            "" => self.label_for(coords).unwrap_or_else(|| coords.to_string()),
            l => l.to_string(),
        };
        let manual = ManualLocation {
            coords,
            label,
            city_id: None,
        };
        self.cache.set_manual(&manual)?;
        info!(coords = %coords, "manual location set");
        Ok(manual)
    }

    pub fn clear_manual_location(&mut self) -> Result<(), WaktuError> {
        self.cache.clear_manual()?;
        info!("manual location cleared");
        Ok(())
    }

    /// Times for explicit coordinates, bypassing location resolution.
    pub fn times_at(&self, coords: GeoCoordinate, date: NaiveDate) -> DailyTimes {
        self.calculator.calculate(coords, date)
    }

    /// The schedule for `date` at the current location.
    pub async fn prayer_times(&mut self, date: NaiveDate, now: DateTime<Utc>) -> Result<PrayerSchedule, WaktuError> {
        let location = self.current_location(now).await?;
        let times = self.calculator.calculate(location.coords, date);

        let hijri = match to_hijri(date, self.config.calculation.hijri_adjustment) {
            Ok(h) => Some(h),
            Err(e) => {
                debug!(error = %e, "no hijri date");
                None
            }
        };

        #[cfg(feature = "remote")]
        if let Some(remote) = &self.remote {
            remote.compare(&self.cities, &location, &times).await;
        }

        Ok(PrayerSchedule { location, times, hijri })
    }

    /// Countdown to the next obligatory prayer.
    pub fn next_prayer(&self, times: &DailyTimes, now: DateTime<Utc>) -> Option<UpcomingPrayer> {
        next_prayer(&self.calculator, times, local_now(times, now))
    }

    /// Reminders still ahead today, honoring the notification settings.
    pub fn reminders(&self, times: &DailyTimes, now: DateTime<Utc>) -> Vec<Reminder> {
        if !self.config.notifications.enabled {
            return Vec::new();
        }
        plan_reminders(times, local_now(times, now), self.config.notifications.reminder_lead_minutes)
    }

    pub fn tasbih(&self) -> Result<TasbihCounter, WaktuError> {
        TasbihCounter::load(self.cache.store().as_ref())
    }

    pub fn save_tasbih(&self, counter: &TasbihCounter) -> Result<(), WaktuError> {
        counter.save(self.cache.store().as_ref())
    }
}
