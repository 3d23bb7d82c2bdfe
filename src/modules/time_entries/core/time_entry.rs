// A recorded stretch of tracked time.
//
// Notes
// - Instants are epoch milliseconds, duration is milliseconds.
// - `end_time - start_time == duration` holds after creation and after every edit.
// - Serialized with camelCase keys, the shape the persisted `timeEntries` array uses.

use crate::modules::time_entries::core::duration_format;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: u64,
    pub project: String,
    pub duration: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub date: NaiveDate,
}

impl TimeEntry {
    pub fn formatted_duration(&self) -> String {
        duration_format::format(self.duration)
    }
}
