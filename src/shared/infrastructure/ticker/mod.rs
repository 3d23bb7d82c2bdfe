// Periodic callback port.
//
// Purpose
// - Drive live display refreshes while the timer runs, without the core owning a runtime.
//
// Responsibilities
// - `Ticker::every` schedules a callback and hands back exactly one owned `TickHandle`.
// - Cancelling a handle is idempotent; dropping it cancels too.
//
// Boundaries
// - Callbacks only publish display data. They never transition tracker state.

pub mod manual;
pub mod tokio_ticker;

use std::time::Duration;

pub type TickCallback = Box<dyn Fn() + Send + 'static>;

pub trait Ticker: Send + Sync {
    fn every(&self, period: Duration, tick: TickCallback) -> TickHandle;
}

pub struct TickHandle {
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl TickHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing behind it, for when scheduling was not possible.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TickHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickHandle")
            .field("active", &self.is_active())
            .finish()
    }
}
