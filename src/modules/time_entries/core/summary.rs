// Daily summary: total tracked time per project.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use std::collections::BTreeMap;

pub fn aggregate_by_project<'a>(
    entries: impl IntoIterator<Item = &'a TimeEntry>,
) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        let total: &mut u64 = totals.entry(entry.project.clone()).or_default();
        *total = total.saturating_add(entry.duration);
    }
    totals
}
