//! Prayer times estimation for waktu.
//!
//! A deterministic, offline estimator: regional anchor tables corrected for
//! position, season and calculation method. See [`prayer`] for the pipeline.

pub mod prayer;
pub mod region;
pub mod solar;

pub use prayer::{bounds, estimate_prayer_times, DailyTimes, LocalPrayerTimesCalculator};
pub use region::{BaseTimes, Region, RegionProfile};
