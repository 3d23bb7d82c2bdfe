// Key-value persistence port.
//
// Purpose
// - Describe the text storage the tracker flushes its state to, without implementing it.
//
// Responsibilities
// - Keep the core independent of where state lives (browser-style local storage, files, memory).
// - Values are JSON documents stored under fixed keys.
//
// Boundaries
// - Adapters implement the trait in the submodules. Callers treat failures as best effort:
//   they log and carry on with in-memory state.

pub mod file;
pub mod in_memory;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const TIME_ENTRIES_KEY: &str = "timeEntries";
pub const PROJECTS_KEY: &str = "projects";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, PersistenceError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
