// Known project names offered when starting the timer.
//
// Notes
// - Seeded with the default list; persisted names are merged after it, skipping duplicates.
// - Grows only. Names are trimmed and compared exactly.

use crate::modules::time_entries::core::errors::{TrackerError, ValidationError};
use crate::shared::infrastructure::key_value_store::{
    KeyValueStore, PROJECTS_KEY, read_json, write_json,
};
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_PROJECTS: [&str; 3] = ["Projekt A", "Projekt B", "Projekt C"];

pub struct ProjectRegistry {
    names: Vec<String>,
    store: Arc<dyn KeyValueStore>,
}

impl ProjectRegistry {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut names: Vec<String> = DEFAULT_PROJECTS.iter().map(|name| name.to_string()).collect();

        match read_json::<Vec<String>>(store.as_ref(), PROJECTS_KEY) {
            Ok(Some(persisted)) => {
                for name in persisted {
                    let name = name.trim();
                    if !name.is_empty() && !names.iter().any(|known| known == name) {
                        names.push(name.to_string());
                    }
                }
            }
            Ok(None) => {}
            Err(error) => warn!(%error, "could not load projects, using the defaults"),
        }

        Self { names, store }
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.names.iter().any(|known| known == name)
    }

    /// Returns `Ok(false)` when the name is already known.
    pub fn add(&mut self, name: &str) -> Result<bool, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyProjectName.into());
        }
        if self.contains(name) {
            debug!(name, "project already known");
            return Ok(false);
        }

        self.names.push(name.to_string());
        if let Err(error) = write_json(self.store.as_ref(), PROJECTS_KEY, &self.names) {
            warn!(%error, "could not persist projects, keeping them in memory");
        }
        Ok(true)
    }
}
