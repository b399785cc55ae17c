//! Location resolution for waktu.
//!
//! The app must show a schedule even when GPS is off, denied or missing,
//! so position is resolved through a fallback chain:
//! manual override, cached fix, live GPS, stale cache, then locale
//! heuristics and finally a preset city.

pub mod cache;
pub mod gps;
pub mod permission;
pub mod resolve;
pub mod store;

pub use cache::LocationCache;
pub use gps::{FixedGps, GpsOutcome, GpsProvider, NoGps};
pub use permission::{PermissionState, PermissionTracker};
pub use resolve::{
    resolve_location, CachedLocation, LocaleHints, LocationSource, ManualLocation, Preset, ResolvedLocation,
    DEFAULT_PRESET,
};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
