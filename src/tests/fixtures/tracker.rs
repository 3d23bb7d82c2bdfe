// Shared tracker harness: an in-memory store, a manual clock and a manual ticker.

use crate::modules::time_entries::application::time_tracker::TimeTracker;
use crate::shared::core::clock::ManualClock;
use crate::shared::infrastructure::key_value_store::in_memory::InMemoryKeyValueStore;
use crate::shared::infrastructure::ticker::manual::ManualTicker;
use crate::shell::state::AppState;
use crate::tests::fixtures::time_entry::FIXED_START;
use std::sync::Arc;

pub struct TrackerHarness {
    pub store: Arc<InMemoryKeyValueStore>,
    pub clock: Arc<ManualClock>,
    pub ticker: ManualTicker,
    pub tracker: TimeTracker,
}

#[allow(dead_code)]
impl TrackerHarness {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryKeyValueStore::new()))
    }

    pub fn with_store(store: Arc<InMemoryKeyValueStore>) -> Self {
        let clock = Arc::new(ManualClock::new(FIXED_START));
        let ticker = ManualTicker::new();
        let tracker = TimeTracker::new(store.clone(), clock.clone(), Arc::new(ticker.clone()));
        Self {
            store,
            clock,
            ticker,
            tracker,
        }
    }

    /// A fresh tracker hydrated from the same backing store, as after a restart.
    pub fn reload(&self) -> TimeTracker {
        TimeTracker::new(
            self.store.clone(),
            self.clock.clone(),
            Arc::new(self.ticker.clone()),
        )
    }

    /// Moves the tracker into shared HTTP state; keep clones of the clock or store first.
    pub fn into_state(self) -> AppState {
        AppState::new(self.tracker)
    }
}
