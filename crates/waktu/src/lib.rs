//! # Waktu
//!
//! Islamic prayer times that work without a network or GPS.
//!
//! This crate is a facade that re-exports the `waktu` workspace.
//!
//! ## Modules
//!
//! - `types`: coordinates, prayers, timings, calculation methods, errors
//! - `calendar`: Hijri conversion
//! - `astronomy`: the offline estimator
//! - `cities`: Indonesian gazetteer with fuzzy search
//! - `location`: the location fallback chain and persistence
//! - `notify`: prayer reminders
//! - `network`: MyQuran client (feature `remote`)
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use waktu::prelude::*;
//!
//! let jakarta = GeoCoordinate::new(-6.2088, 106.8456).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let times = LocalPrayerTimesCalculator::default().calculate(jakarta, date);
//! println!("Maghrib {}", times.format(Prayer::Maghrib));
//! ```

pub use waktu_core::*;
