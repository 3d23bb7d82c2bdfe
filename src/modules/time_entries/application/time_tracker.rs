// Time tracker composition root for one user session.
//
// Purpose
// - Own the stopwatch, the entry store and the project registry, and wire them to the clock,
//   the ticker and the view-facing channels.
//
// Responsibilities
// - start/stop/reset drive the Timer; stop records the finished session as a new entry.
// - While running, a single tick publishes live snapshots on the watch channel.
// - Each tick is tagged with a generation. Cancelling bumps it, so a tick already in flight
//   cannot overwrite the snapshot published by stop or reset.
// - Every mutation is announced on the change broadcast so views can re-render.
//
// Boundaries
// - Not shared between threads on its own; the HTTP shell serializes access with a mutex.

use crate::modules::time_entries::application::changes::Change;
use crate::modules::time_entries::application::entry_store::EntryStore;
use crate::modules::time_entries::application::project_registry::ProjectRegistry;
use crate::modules::time_entries::core::errors::TrackerError;
use crate::modules::time_entries::core::summary::aggregate_by_project;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::core::timer::{Timer, TimerSnapshot, TimerStatus};
use crate::shared::core::clock::{Clock, date_of};
use crate::shared::infrastructure::confirmation::Confirm;
use crate::shared::infrastructure::key_value_store::KeyValueStore;
use crate::shared::infrastructure::ticker::{TickHandle, Ticker};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tracing::{debug, info};

pub const TICK_PERIOD: Duration = Duration::from_millis(100);
pub const RESET_CONFIRM_THRESHOLD_MS: u64 = 60_000;
pub const RESET_PROMPT: &str = "Reset the timer? The elapsed time will be discarded.";

const CHANGE_CAPACITY: usize = 64;

pub struct TimeTracker {
    clock: Arc<dyn Clock>,
    ticker: Arc<dyn Ticker>,
    timer: Timer,
    tick: Option<TickHandle>,
    tick_generation: Arc<AtomicU64>,
    entries: EntryStore,
    projects: ProjectRegistry,
    changes: broadcast::Sender<Change>,
    display: Arc<watch::Sender<TimerSnapshot>>,
}

impl TimeTracker {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        ticker: Arc<dyn Ticker>,
    ) -> Self {
        let entries = EntryStore::load(Arc::clone(&store));
        let projects = ProjectRegistry::load(store);
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        let (display, _) = watch::channel(TimerSnapshot::idle(0));

        info!(
            entries = entries.len(),
            projects = projects.list().len(),
            "time tracker ready"
        );

        Self {
            clock,
            ticker,
            timer: Timer::new(),
            tick: None,
            tick_generation: Arc::new(AtomicU64::new(0)),
            entries,
            projects,
            changes,
            display: Arc::new(display),
        }
    }

    pub fn start(&mut self, label: &str) -> Result<(), TrackerError> {
        let now = self.clock.now_millis();
        let started_at = self.timer.start(label, now)?;
        let label = self.timer.label().unwrap_or_default().to_string();

        self.cancel_tick();
        let clock = Arc::clone(&self.clock);
        let display = Arc::clone(&self.display);
        let current = Arc::clone(&self.tick_generation);
        let generation = current.load(Ordering::SeqCst);
        let tick_label = label.clone();
        self.tick = Some(self.ticker.every(
            TICK_PERIOD,
            Box::new(move || {
                let elapsed = u64::try_from(clock.now_millis().saturating_sub(started_at)).unwrap_or(0);
                // Checked under the channel's write lock, which `publish` also takes.
                display.send_if_modified(|snapshot| {
                    if current.load(Ordering::SeqCst) != generation {
                        return false;
                    }
                    *snapshot = TimerSnapshot::running(tick_label.clone(), elapsed);
                    true
                });
            }),
        ));

        self.publish(now);
        info!(label = %label, started_at, "timer started");
        self.notify(Change::TimerStarted { label });
        Ok(())
    }

    /// Records the running session. Returns `None` when the timer was idle.
    pub fn stop(&mut self) -> Option<TimeEntry> {
        let now = self.clock.now_millis();
        let session = match self.timer.stop(now) {
            Ok(session) => session,
            Err(error) => {
                debug!(%error, "stop ignored");
                return None;
            }
        };
        self.cancel_tick();

        let mut entry = TimeEntry {
            id: self.entries.next_id(now),
            project: session.label,
            duration: session.duration,
            start_time: session.started_at,
            end_time: session.ended_at,
            date: date_of(session.started_at),
        };
        entry.id = self.entries.insert_front(entry.clone());

        self.publish(now);
        info!(id = entry.id, project = %entry.project, duration = entry.duration, "timer stopped");
        self.notify(Change::TimerStopped { entry_id: entry.id });
        self.notify(Change::EntryInserted { id: entry.id });
        Some(entry)
    }

    /// Discards the current elapsed time. Above one minute the confirmation decides;
    /// returns whether the reset happened.
    pub fn reset(&mut self, confirm: &dyn Confirm) -> bool {
        let now = self.clock.now_millis();
        let elapsed = self.timer.elapsed(now);
        if elapsed > RESET_CONFIRM_THRESHOLD_MS && !confirm.confirm(RESET_PROMPT) {
            debug!(elapsed, "reset declined");
            return false;
        }

        self.cancel_tick();
        let discarded = self.timer.reset(now);
        self.publish(now);
        info!(discarded, "timer reset");
        self.notify(Change::TimerReset);
        true
    }

    pub fn status(&self) -> TimerStatus {
        self.timer.status()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.timer.snapshot(self.clock.now_millis())
    }

    pub fn add_project(&mut self, name: &str) -> Result<bool, TrackerError> {
        let added = self.projects.add(name)?;
        if added {
            let name = name.trim().to_string();
            info!(name = %name, "project added");
            self.notify(Change::ProjectAdded { name });
        }
        Ok(added)
    }

    pub fn projects(&self) -> &[String] {
        self.projects.list()
    }

    pub fn entries(&self) -> &[TimeEntry] {
        self.entries.list_all()
    }

    pub fn entries_for_date(&self, date: NaiveDate) -> Vec<TimeEntry> {
        self.entries.list_for_date(date)
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn today_summary(&self) -> BTreeMap<String, u64> {
        self.summary_for_date(self.clock.today())
    }

    pub fn summary_for_date(&self, date: NaiveDate) -> BTreeMap<String, u64> {
        aggregate_by_project(&self.entries.list_for_date(date))
    }

    pub fn update_entry(&mut self, id: u64, time_string: &str) -> Result<TimeEntry, TrackerError> {
        let updated = self.entries.update(id, time_string)?;
        info!(id, duration = updated.duration, "time entry updated");
        self.notify(Change::EntryUpdated { id });
        Ok(updated)
    }

    pub fn update_entry_range(
        &mut self,
        id: u64,
        start_time: i64,
        end_time: i64,
    ) -> Result<TimeEntry, TrackerError> {
        let updated = self.entries.update_range(id, start_time, end_time)?;
        info!(id, start_time, end_time, "time entry range updated");
        self.notify(Change::EntryUpdated { id });
        Ok(updated)
    }

    pub fn delete_entry(&mut self, id: u64, confirm: &dyn Confirm) -> bool {
        let deleted = self.entries.delete(id, confirm);
        if deleted {
            info!(id, "time entry deleted");
            self.notify(Change::EntryDeleted { id });
        }
        deleted
    }

    pub fn subscribe_changes(&self) -> broadcast::Receiver<Change> {
        self.changes.subscribe()
    }

    pub fn watch_timer(&self) -> watch::Receiver<TimerSnapshot> {
        self.display.subscribe()
    }

    fn cancel_tick(&mut self) {
        self.tick_generation.fetch_add(1, Ordering::SeqCst);
        if let Some(mut tick) = self.tick.take() {
            tick.cancel();
        }
    }

    fn publish(&self, now: i64) {
        self.display.send_replace(self.timer.snapshot(now));
    }

    fn notify(&self, change: Change) {
        // No subscribers is not an error.
        let _ = self.changes.send(change);
    }
}
