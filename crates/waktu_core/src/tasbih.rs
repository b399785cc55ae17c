//! Digital tasbih (dhikr counter).

use serde::{Deserialize, Serialize};
use tracing::warn;

use waktu_location::KeyValueStore;
use waktu_types::WaktuError;

pub const TASBIH_KEY: &str = "waktu.tasbih";
pub const DEFAULT_TARGET: u32 = 33;

/// Rotation after each completed round.
pub const PHRASES: [&str; 3] = ["Subhanallah", "Alhamdulillah", "Allahu Akbar"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasbihCounter {
    count: u32,
    target: u32,
    rounds: u32,
    phrase: usize,
}

impl Default for TasbihCounter {
    fn default() -> Self {
        Self {
            count: 0,
            target: DEFAULT_TARGET,
            rounds: 0,
            phrase: 0,
        }
    }
}

/// What a single tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    pub count: u32,
    /// The tap finished a round; the counter has already moved to the next phrase.
    pub round_completed: bool,
}

impl TasbihCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    /// `InvalidConfiguration` for a zero target.
    pub fn with_target(target: u32) -> Result<Self, WaktuError> {
        if target == 0 {
            return Err(WaktuError::invalid_config("tasbih target must be at least 1"));
        }
        Ok(Self {
            target,
            ..Self::default()
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn phrase(&self) -> &'static str {
        PHRASES[self.phrase % PHRASES.len()]
    }

    /// Total taps since the last reset.
    pub fn total(&self) -> u64 {
        u64::from(self.rounds) * u64::from(self.target) + u64::from(self.count)
    }

    pub fn increment(&mut self) -> Tap {
        self.count += 1;
        if self.count >= self.target {
            let count = self.count;
            self.count = 0;
            self.rounds += 1;
            self.phrase = (self.phrase + 1) % PHRASES.len();
            return Tap {
                count,
                round_completed: true,
            };
        }
        Tap {
            count: self.count,
            round_completed: false,
        }
    }

    /// Back to zero, keeping the target.
    pub fn reset(&mut self) {
        *self = Self {
            target: self.target,
            ..Self::default()
        };
    }

    /// Restores the saved counter. A missing or unreadable record gives a fresh one.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, WaktuError> {
        let Some(raw) = store.get(TASBIH_KEY)? else {
            return Ok(Self::default());
        };
        match serde_json::from_str::<Self>(&raw) {
            Ok(counter) if counter.target > 0 => Ok(counter),
            Ok(_) | Err(_) => {
                warn!("discarding unreadable tasbih record");
                store.remove(TASBIH_KEY)?;
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), WaktuError> {
        let raw = serde_json::to_string(self).map_err(|e| WaktuError::StorageError(e.to_string()))?;
        store.set(TASBIH_KEY, &raw)
    }
}
