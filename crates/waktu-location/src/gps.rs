//! Live position providers.

use std::future::Future;

use serde::{Deserialize, Serialize};
use waktu_types::GeoCoordinate;

/// Result of one live GPS attempt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GpsOutcome {
    Fix {
        coords: GeoCoordinate,
        /// Horizontal accuracy in metres, when the platform reports it.
        accuracy_m: Option<f64>,
    },
    PermissionDenied,
    Unavailable,
    Timeout,
    /// No attempt was made (zero-GPS mode, denied earlier, or a fresh cache was enough).
    Skipped,
}

impl GpsOutcome {
    pub fn coords(&self) -> Option<GeoCoordinate> {
        match self {
            GpsOutcome::Fix { coords, .. } => Some(*coords),
            _ => None,
        }
    }
}

/// A source of live fixes. Platform glue implements this.
pub trait GpsProvider: Send + Sync {
    fn locate(&self) -> impl Future<Output = GpsOutcome> + Send;
}

/// Always answers with the same outcome. Handy for tests and fixed installs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGps(pub GpsOutcome);

impl FixedGps {
    pub fn at(coords: GeoCoordinate) -> Self {
        Self(GpsOutcome::Fix { coords, accuracy_m: None })
    }
}

impl GpsProvider for FixedGps {
    async fn locate(&self) -> GpsOutcome {
        self.0
    }
}

/// A device without positioning hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGps;

impl GpsProvider for NoGps {
    async fn locate(&self) -> GpsOutcome {
        GpsOutcome::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_providers() {
        let here = GeoCoordinate::new_unchecked(-7.25, 112.75);
        assert_eq!(FixedGps::at(here).locate().await.coords(), Some(here));
        assert_eq!(NoGps.locate().await, GpsOutcome::Unavailable);
        assert_eq!(FixedGps(GpsOutcome::Timeout).locate().await.coords(), None);
    }
}
