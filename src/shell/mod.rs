// Composition root for the timetracker service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the file-backed store, the system clock and the tokio ticker.
// - Wire the tracker into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
