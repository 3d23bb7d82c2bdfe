// Tokio implementation of the Ticker port.
//
// Responsibilities
// - Spawn one interval task per schedule and abort it when the handle is cancelled.
// - Degrade to an inert handle when called outside a runtime instead of panicking.

use crate::shared::infrastructure::ticker::{TickCallback, TickHandle, Ticker};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::warn;

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioTicker;

impl TokioTicker {
    pub fn new() -> Self {
        Self
    }
}

impl Ticker for TokioTicker {
    fn every(&self, period: Duration, tick: TickCallback) -> TickHandle {
        let Ok(runtime) = Handle::try_current() else {
            warn!("no tokio runtime available, live timer refresh disabled");
            return TickHandle::inert();
        };

        let task = runtime.spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                tick();
            }
        });

        TickHandle::new(move || task.abort())
    }
}
