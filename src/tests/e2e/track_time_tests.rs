use crate::modules::time_entries::application::time_tracker::TimeTracker;
use crate::modules::time_entries::core::duration_format;
use crate::modules::time_entries::core::errors::{FormatError, TrackerError, ValidationError};
use crate::shared::core::clock::ManualClock;
use crate::shared::infrastructure::confirmation::AutoConfirm;
use crate::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shared::infrastructure::key_value_store::{KeyValueStore, TIME_ENTRIES_KEY};
use crate::shared::infrastructure::ticker::manual::ManualTicker;
use crate::tests::fixtures::time_entry::FIXED_START;
use crate::tests::fixtures::tracker::TrackerHarness;
use std::sync::Arc;

#[test]
fn records_a_stopped_session_as_the_most_recent_entry() {
    let mut harness = TrackerHarness::new();
    harness.clock.set(0);
    harness.tracker.start("Projekt A").unwrap();
    harness.clock.set(5_000);

    let entry = harness.tracker.stop().unwrap();

    assert_eq!(entry.duration, 5_000);
    assert_eq!(entry.project, "Projekt A");
    assert_eq!(harness.tracker.entries().first(), Some(&entry));
    assert_eq!(entry.formatted_duration(), "00:00:05");
}

#[test]
fn edits_a_recorded_duration() {
    let mut harness = TrackerHarness::new();
    harness.tracker.start("Projekt A").unwrap();
    harness.clock.advance(60_000);
    let entry = harness.tracker.stop().unwrap();
    assert_eq!(duration_format::format(entry.duration), "00:01:00");

    let updated = harness.tracker.update_entry(entry.id, "00:02:30").unwrap();

    assert_eq!(updated.duration, 150_000);
    assert_eq!(updated.end_time, updated.start_time + 150_000);
    assert_eq!(updated.start_time, entry.start_time);
}

#[test]
fn rejects_a_malformed_edit_and_keeps_the_entry() {
    let mut harness = TrackerHarness::new();
    harness.tracker.start("Projekt A").unwrap();
    harness.clock.advance(60_000);
    let entry = harness.tracker.stop().unwrap();

    let result = harness.tracker.update_entry(entry.id, "1:2");

    assert_eq!(
        result,
        Err(TrackerError::Validation(ValidationError::Format(
            FormatError::WrongShape("1:2".into())
        )))
    );
    assert_eq!(harness.tracker.entries(), [entry].as_slice());
}

#[test]
fn sums_todays_sessions_per_project() {
    let mut harness = TrackerHarness::new();
    for millis in [60_000, 120_000] {
        harness.tracker.start("Projekt A").unwrap();
        harness.clock.advance(millis);
        harness.tracker.stop().unwrap();
    }

    let summary = harness.tracker.today_summary();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary["Projekt A"], 180_000);
}

#[test]
fn restores_entries_and_projects_after_a_restart() {
    let mut harness = TrackerHarness::new();
    harness.tracker.add_project("Kunde X").unwrap();
    harness.tracker.start("Kunde X").unwrap();
    harness.clock.advance(42_000);
    let entry = harness.tracker.stop().unwrap();
    harness.tracker.start("Projekt B").unwrap();
    harness.clock.advance(1_000);
    harness.tracker.stop().unwrap();
    let before = harness.tracker.entries().to_vec();

    let restored = harness.reload();

    assert_eq!(restored.entries(), before.as_slice());
    assert_eq!(restored.entries()[1], entry);
    assert!(restored.projects().iter().any(|name| name == "Kunde X"));
    assert_eq!(restored.projects().len(), 4);
}

#[test]
fn starts_empty_when_persisted_entries_are_corrupt() {
    let store = Arc::new(InMemoryKeyValueStore::with_value(TIME_ENTRIES_KEY, "{oops"));
    let harness = TrackerHarness::with_store(store);

    assert!(harness.tracker.entries().is_empty());
    assert_eq!(harness.tracker.projects().len(), 3);
}

#[test]
fn keeps_working_in_memory_while_the_store_is_offline() {
    let mut harness = TrackerHarness::new();
    harness.store.toggle_offline();

    harness.tracker.start("Projekt A").unwrap();
    harness.clock.advance(3_000);
    let entry = harness.tracker.stop().unwrap();
    assert!(harness.tracker.delete_entry(entry.id, &AutoConfirm(true)));

    assert!(harness.tracker.entries().is_empty());
    assert_eq!(harness.store.write_count(), 0);
}

#[test]
fn persists_to_json_documents_on_disk() {
    let dir = std::env::temp_dir().join(format!("timetracker-e2e-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let clock = Arc::new(ManualClock::new(FIXED_START));
    let ticker = ManualTicker::new();

    let mut tracker = TimeTracker::new(
        Arc::new(FileKeyValueStore::new(&dir)),
        clock.clone(),
        Arc::new(ticker.clone()),
    );
    tracker.start("Projekt C").unwrap();
    clock.advance(7_000);
    let entry = tracker.stop().unwrap();
    drop(tracker);

    let raw = FileKeyValueStore::new(&dir).get(TIME_ENTRIES_KEY).unwrap().unwrap();
    assert!(raw.contains("\"startTime\""));

    let restored = TimeTracker::new(
        Arc::new(FileKeyValueStore::new(&dir)),
        clock,
        Arc::new(ticker),
    );
    assert_eq!(restored.entries(), [entry].as_slice());
    let _ = std::fs::remove_dir_all(&dir);
}
