//! Core of the waktu prayer times app.
//!
//! Ties the workspace crates together behind [`PrayerTimesService`]:
//! location resolution, offline estimation, the Hijri date, reminders and
//! the tasbih counter, plus configuration and logging setup.

pub mod config;
pub mod logging;
#[cfg(feature = "remote")]
pub mod remote;
pub mod schedule;
pub mod service;
pub mod tasbih;

pub use waktu_astronomy as astronomy;
pub use waktu_calendar as calendar;
pub use waktu_cities as cities;
pub use waktu_location as location;
#[cfg(feature = "remote")]
pub use waktu_network as network;
pub use waktu_notify as notify;
pub use waktu_types as types;

pub use config::Config;
pub use logging::{Verbosity, default_filter, init_logging};
pub use schedule::{PrayerSchedule, UpcomingPrayer};
pub use service::PrayerTimesService;
pub use tasbih::TasbihCounter;
pub use waktu_astronomy::{DailyTimes, LocalPrayerTimesCalculator, estimate_prayer_times};
pub use waktu_calendar::{HijriDay, to_hijri};
pub use waktu_cities::IndonesianCitiesService;
pub use waktu_types::WaktuError;

pub mod prelude {
    pub use crate::types::*;
    pub use crate::{
        Config, DailyTimes, HijriDay, IndonesianCitiesService, LocalPrayerTimesCalculator, PrayerSchedule,
        PrayerTimesService, TasbihCounter, UpcomingPrayer, WaktuError,
    };
    pub use crate::location::{GpsOutcome, GpsProvider, LocaleHints, LocationSource, ResolvedLocation};
    pub use crate::notify::{Notification, NotificationPermission, NotificationService, Notifier};
}
