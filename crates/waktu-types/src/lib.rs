//! Core types for waktu.
//!
//! Coordinates, prayer names, daily timings, calculation conventions and
//! the shared error type. Every other crate in the workspace builds on these.

pub mod error;
pub mod geo;
pub mod method;
pub mod prayer;

pub use error::{WaktuError, HIJRI_MAX_YEAR, HIJRI_MIN_YEAR};
pub use geo::GeoCoordinate;
pub use method::{AsrJuristic, CalculationMethod, IshaRule, MethodParams};
pub use prayer::{format_hhmm, parse_hhmm, Prayer, Timings};
