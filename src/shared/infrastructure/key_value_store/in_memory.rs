// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support tracker tests and local development without touching the filesystem.
//
// Responsibilities
// - Keep values in a map keyed by storage key.
// - Count successful writes so tests can assert that nothing was flushed.
// - Simulate an unavailable backend with an offline toggle.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, PersistenceError};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
    is_offline: AtomicBool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut guard) = store.values.write() {
            guard.insert(key.to_string(), value.to_string());
        }
        store
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_online(&self) -> Result<(), PersistenceError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(PersistenceError::Backend("Key-value store offline".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        self.ensure_online()?;
        let guard = self
            .values
            .read()
            .map_err(|error| PersistenceError::Backend(error.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.ensure_online()?;
        let mut guard = self
            .values
            .write()
            .map_err(|error| PersistenceError::Backend(error.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
