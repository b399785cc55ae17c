//! Geolocation permission tracking.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::gps::GpsOutcome;

/// After this many timeouts/unavailable results in a row, stop asking.
pub const MAX_CONSECUTIVE_FAILURES: u32 = 3;

/// What we know about the user's geolocation permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PermissionState {
    /// Never asked.
    #[default]
    Unknown,
    /// Asked, no answer yet (or the answer was not a fix).
    Prompt,
    Granted,
    Denied,
}

/// Tracks permission transitions and decides whether a live GPS call is worth making.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionTracker {
    state: PermissionState,
    zero_gps: bool,
    consecutive_failures: u32,
}

impl PermissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-GPS-dependency mode: never attempt live GPS.
    pub fn zero_gps(mut self, enabled: bool) -> Self {
        self.zero_gps = enabled;
        self
    }

    pub fn set_zero_gps(&mut self, enabled: bool) {
        self.zero_gps = enabled;
    }

    pub fn is_zero_gps(&self) -> bool {
        self.zero_gps
    }

    pub fn state(&self) -> PermissionState {
        self.state
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn should_attempt_gps(&self) -> bool {
        !self.zero_gps
            && self.state != PermissionState::Denied
            && self.consecutive_failures < MAX_CONSECUTIVE_FAILURES
    }

    /// Folds one GPS outcome into the tracked state.
    pub fn record(&mut self, outcome: &GpsOutcome) {
        let before = self.state;
        match outcome {
            GpsOutcome::Fix { .. } => {
                self.state = PermissionState::Granted;
                self.consecutive_failures = 0;
            }
            GpsOutcome::PermissionDenied => {
                self.state = PermissionState::Denied;
            }
            GpsOutcome::Unavailable | GpsOutcome::Timeout => {
                if self.state == PermissionState::Unknown {
                    self.state = PermissionState::Prompt;
                }
                self.consecutive_failures += 1;
                debug!(failures = self.consecutive_failures, ?outcome, "gps attempt failed");
            }
            GpsOutcome::Skipped => {}
        }
        if before != self.state {
            info!(from = ?before, to = ?self.state, "location permission changed");
        }
    }

    /// Forget everything, e.g. after the user re-enables location in settings.
    pub fn reset(&mut self) {
        self.state = PermissionState::Unknown;
        self.consecutive_failures = 0;
    }
}
