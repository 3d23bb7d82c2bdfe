// File-backed implementation of the KeyValueStore port.
//
// Responsibilities
// - Store each key as `<key>.json` inside a data directory.
// - Treat a missing file as a missing key.
// - Write through a temporary file and rename, so a crash never leaves half a document behind.

use crate::shared::infrastructure::key_value_store::{KeyValueStore, PersistenceError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(PersistenceError::Backend(error.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir).map_err(|error| PersistenceError::Backend(error.to_string()))?;

        let path = self.path_for(key);
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|error| PersistenceError::Backend(error.to_string()))?;
        fs::rename(&staging, &path).map_err(|error| PersistenceError::Backend(error.to_string()))
    }
}
