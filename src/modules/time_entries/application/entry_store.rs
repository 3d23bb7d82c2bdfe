// Ordered collection of recorded time entries, most recent first.
//
// Responsibilities
// - Hydrate from the `timeEntries` key; missing or corrupt data yields an empty list.
// - Repair hydrated entries that break the model: duplicate ids are re-keyed and
//   `end_time` is re-derived from `start_time + duration`. Repairs are flushed back.
// - Flush the whole list after every mutation. Flush failures are logged and absorbed.
// - Keep ids unique: new ids derive from the creation instant and never repeat.

use crate::modules::time_entries::core::editor;
use crate::modules::time_entries::core::errors::TrackerError;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::infrastructure::confirmation::Confirm;
use crate::shared::infrastructure::key_value_store::{
    KeyValueStore, TIME_ENTRIES_KEY, read_json, write_json,
};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DELETE_PROMPT: &str = "Delete this time entry?";

pub struct EntryStore {
    entries: Vec<TimeEntry>,
    store: Arc<dyn KeyValueStore>,
}

impl EntryStore {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let entries = match read_json::<Vec<TimeEntry>>(store.as_ref(), TIME_ENTRIES_KEY) {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "could not load time entries, starting with none");
                Vec::new()
            }
        };
        let (entries, repaired) = repair(entries);
        debug!(count = entries.len(), repaired, "time entries loaded");

        let loaded = Self { entries, store };
        if repaired > 0 {
            loaded.persist();
        }
        loaded
    }

    pub fn list_all(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn list_for_date(&self, date: NaiveDate) -> Vec<TimeEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.date == date)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u64) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The creation instant, bumped past the largest stored id when needed.
    pub fn next_id(&self, now: i64) -> u64 {
        let candidate = u64::try_from(now).unwrap_or(0);
        match self.entries.iter().map(|entry| entry.id).max() {
            Some(largest) if largest >= candidate => largest.saturating_add(1),
            _ => candidate,
        }
    }

    pub fn insert_front(&mut self, mut entry: TimeEntry) -> u64 {
        if self.get(entry.id).is_some() {
            let replacement = self.next_id(0);
            warn!(id = entry.id, replacement, "duplicate time entry id, assigning a new one");
            entry.id = replacement;
        }
        let id = entry.id;
        self.entries.insert(0, entry);
        self.persist();
        id
    }

    /// Removes the entry after confirmation. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64, confirm: &dyn Confirm) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            debug!(id, "delete ignored, no such time entry");
            return false;
        };
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(id, "delete declined");
            return false;
        }
        self.entries.remove(index);
        self.persist();
        true
    }

    pub fn update(&mut self, id: u64, time_string: &str) -> Result<TimeEntry, TrackerError> {
        let entry = self.find_mut(id)?;
        editor::validate_and_apply(entry, time_string)?;
        let updated = entry.clone();
        self.persist();
        Ok(updated)
    }

    pub fn update_range(
        &mut self,
        id: u64,
        start_time: i64,
        end_time: i64,
    ) -> Result<TimeEntry, TrackerError> {
        let entry = self.find_mut(id)?;
        editor::edit_session(entry, start_time, end_time)?;
        let updated = entry.clone();
        self.persist();
        Ok(updated)
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut TimeEntry, TrackerError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(TrackerError::EntryNotFound(id))
    }

    fn persist(&self) {
        if let Err(error) = write_json(self.store.as_ref(), TIME_ENTRIES_KEY, &self.entries) {
            warn!(%error, "could not persist time entries, keeping them in memory");
        }
    }
}

/// Returns the entries with unique ids and consistent end times, plus how many were changed.
fn repair(mut entries: Vec<TimeEntry>) -> (Vec<TimeEntry>, usize) {
    let mut next_free = entries
        .iter()
        .map(|entry| entry.id)
        .max()
        .map_or(0, |largest| largest.saturating_add(1));
    let mut seen = HashSet::with_capacity(entries.len());
    let mut repaired = 0;

    for entry in &mut entries {
        let mut changed = false;

        if !seen.insert(entry.id) {
            warn!(id = entry.id, replacement = next_free, "duplicate time entry id on load, re-keying");
            entry.id = next_free;
            seen.insert(next_free);
            next_free = next_free.saturating_add(1);
            changed = true;
        }

        let expected_end = i64::try_from(entry.duration)
            .ok()
            .and_then(|duration| entry.start_time.checked_add(duration));
        match expected_end {
            Some(end_time) if end_time == entry.end_time => {}
            Some(end_time) => {
                warn!(
                    id = entry.id,
                    stored = entry.end_time,
                    derived = end_time,
                    "time entry end does not match its duration, re-deriving"
                );
                entry.end_time = end_time;
                changed = true;
            }
            None => {
                let duration = editor::calculate_duration(entry.start_time, entry.end_time).unwrap_or(0);
                warn!(id = entry.id, duration, "time entry duration out of range, taking it from the range");
                entry.duration = duration;
                entry.end_time = entry.start_time.saturating_add(i64::try_from(duration).unwrap_or(0));
                changed = true;
            }
        }

        if changed {
            repaired += 1;
        }
    }
    (entries, repaired)
}
