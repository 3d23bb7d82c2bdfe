// Shared test fixture for TimeEntry.
// Setting the start or the duration keeps `end_time` and `date` consistent with them.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::clock::date_of;
use chrono::NaiveDate;

pub const FIXED_START: i64 = 1_700_000_000_000;

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                id: FIXED_START as u64,
                project: "Projekt A".to_string(),
                duration: 60_000,
                start_time: FIXED_START,
                end_time: FIXED_START + 60_000,
                date: date_of(FIXED_START),
            },
        }
    }

    pub fn id(mut self, v: u64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn duration(mut self, v: u64) -> Self {
        self.inner.duration = v;
        self.inner.end_time = self.inner.start_time.saturating_add(v as i64);
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.start_time = v;
        self.inner.end_time = v.saturating_add(self.inner.duration as i64);
        self.inner.date = date_of(v);
        self
    }

    pub fn end_time(mut self, v: i64) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}
