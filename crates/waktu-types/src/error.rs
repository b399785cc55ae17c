use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum Gregorian year for Hijri conversion.
pub const HIJRI_MIN_YEAR: i32 = 1938;
/// Maximum Gregorian year for Hijri conversion.
pub const HIJRI_MAX_YEAR: i32 = 2076;

/// Errors from waktu operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum WaktuError {
    /// Latitude or longitude outside the valid range, or not finite.
    #[error("Invalid coordinates: lat {lat}, lng {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// Date outside supported range (1938-2076).
    #[error("Date {date} is out of supported range ({min} to {max})")]
    DateOutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// No gazetteer entry matched.
    #[error("City not found: {query}")]
    CityNotFound { query: String },

    /// Key/value store failure.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Remote API failure.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The user refused a permission (location, notifications).
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

impl WaktuError {
    /// Creates a `DateOutOfRange` error with standard bounds.
    pub fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange {
            date,
            min: NaiveDate::from_ymd_opt(HIJRI_MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN),
            max: NaiveDate::from_ymd_opt(HIJRI_MAX_YEAR, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates a `CityNotFound` error.
    pub fn city_not_found(query: impl Into<String>) -> Self {
        Self::CityNotFound { query: query.into() }
    }
}
