// Hand-driven implementation of the Ticker port.
//
// Purpose
// - Make periodic refreshes deterministic in tests: nothing ticks until `fire` is called.
//
// Responsibilities
// - Remember every scheduled callback and whether its handle is still live.

use crate::shared::infrastructure::ticker::{TickCallback, TickHandle, Ticker};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

struct Slot {
    period: Duration,
    tick: TickCallback,
    active: bool,
}

#[derive(Default, Clone)]
pub struct ManualTicker {
    slots: Arc<Mutex<Vec<Slot>>>,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every live callback once and returns how many ran.
    pub fn fire(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let mut fired = 0;
        for slot in slots.iter().filter(|slot| slot.active) {
            (slot.tick)();
            fired += 1;
        }
        fired
    }

    pub fn active(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.iter().filter(|slot| slot.active).count()
    }

    pub fn scheduled(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn last_period(&self) -> Option<Duration> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.last().map(|slot| slot.period)
    }
}

impl Ticker for ManualTicker {
    fn every(&self, period: Duration, tick: TickCallback) -> TickHandle {
        let index = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.push(Slot {
                period,
                tick,
                active: true,
            });
            slots.len() - 1
        };

        let slots = Arc::clone(&self.slots);
        TickHandle::new(move || {
            let mut slots = slots.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get_mut(index) {
                slot.active = false;
            }
        })
    }
}
