//! Typed access to the persisted manual override and last known position.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

use waktu_types::WaktuError;

use crate::resolve::{CachedLocation, ManualLocation};
use crate::store::KeyValueStore;

pub const MANUAL_LOCATION_KEY: &str = "waktu.location.manual";
pub const CACHED_LOCATION_KEY: &str = "waktu.location.cached";

/// JSON records over a [`KeyValueStore`].
#[derive(Clone)]
pub struct LocationCache {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for LocationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationCache").finish_non_exhaustive()
    }
}

impl LocationCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    pub fn manual(&self) -> Result<Option<ManualLocation>, WaktuError> {
        self.load(MANUAL_LOCATION_KEY)
    }

    pub fn set_manual(&self, manual: &ManualLocation) -> Result<(), WaktuError> {
        self.save(MANUAL_LOCATION_KEY, manual)
    }

    pub fn clear_manual(&self) -> Result<(), WaktuError> {
        self.store.remove(MANUAL_LOCATION_KEY)
    }

    pub fn cached(&self) -> Result<Option<CachedLocation>, WaktuError> {
        self.load(CACHED_LOCATION_KEY)
    }

    pub fn set_cached(&self, cached: &CachedLocation) -> Result<(), WaktuError> {
        self.save(CACHED_LOCATION_KEY, cached)
    }

    pub fn clear_cached(&self) -> Result<(), WaktuError> {
        self.store.remove(CACHED_LOCATION_KEY)
    }

    /// Unparsable entries are treated as absent and dropped.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, WaktuError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "discarding unreadable location record");
                self.store.remove(key)?;
                Ok(None)
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), WaktuError> {
        let raw = serde_json::to_string(value).map_err(|e| WaktuError::StorageError(e.to_string()))?;
        self.store.set(key, &raw)
    }
}
