use crate::modules::time_entries::application::time_tracker::TimeTracker;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Mutex<TimeTracker>>,
}

impl AppState {
    pub fn new(tracker: TimeTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
