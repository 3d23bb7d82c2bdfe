// Stopwatch state machine.
//
// Purpose
// - Decide the Idle/Running transitions given the current instant.
//
// Responsibilities
// - start: requires a non-empty label and an idle timer; carries any idle elapsed time forward.
// - stop: only from Running; yields the finished session for the caller to record.
// - reset: from any state; discards elapsed time without producing a session.
//
// Boundaries
// - No input or output, no clock. Callers pass `now` in epoch milliseconds.

use crate::modules::time_entries::core::duration_format;
use crate::modules::time_entries::core::errors::{TrackerError, ValidationError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerStatus::Idle => f.write_str("idle"),
            TimerStatus::Running => f.write_str("running"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerState {
    Idle { elapsed: u64 },
    Running { label: String, started_at: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedSession {
    pub label: String,
    pub started_at: i64,
    pub ended_at: i64,
    pub duration: u64,
}

/// What a view needs to draw the stopwatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub label: Option<String>,
    pub elapsed: u64,
    pub display: String,
}

impl TimerSnapshot {
    pub fn idle(elapsed: u64) -> Self {
        Self {
            status: TimerStatus::Idle,
            label: None,
            elapsed,
            display: duration_format::format(elapsed),
        }
    }

    pub fn running(label: impl Into<String>, elapsed: u64) -> Self {
        Self {
            status: TimerStatus::Running,
            label: Some(label.into()),
            elapsed,
            display: duration_format::format(elapsed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    state: TimerState,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle { elapsed: 0 },
        }
    }

    /// An idle timer that already holds `elapsed` milliseconds; the next start continues from there.
    #[cfg(test)]
    pub fn with_elapsed(elapsed: u64) -> Self {
        Self {
            state: TimerState::Idle { elapsed },
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        match self.state {
            TimerState::Idle { .. } => TimerStatus::Idle,
            TimerState::Running { .. } => TimerStatus::Running,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match &self.state {
            TimerState::Running { label, .. } => Some(label),
            TimerState::Idle { .. } => None,
        }
    }

    pub fn elapsed(&self, now: i64) -> u64 {
        match self.state {
            TimerState::Idle { elapsed } => elapsed,
            TimerState::Running { started_at, .. } => elapsed_between(started_at, now),
        }
    }

    pub fn snapshot(&self, now: i64) -> TimerSnapshot {
        match &self.state {
            TimerState::Idle { elapsed } => TimerSnapshot::idle(*elapsed),
            TimerState::Running { label, started_at } => {
                TimerSnapshot::running(label.clone(), elapsed_between(*started_at, now))
            }
        }
    }

    /// Returns the effective start instant, `now` minus any carried-over elapsed time.
    pub fn start(&mut self, label: &str, now: i64) -> Result<i64, TrackerError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::EmptyLabel.into());
        }

        let TimerState::Idle { elapsed } = self.state else {
            return Err(TrackerError::InvalidState {
                action: "start",
                status: TimerStatus::Running,
            });
        };

        let carried = i64::try_from(elapsed).unwrap_or(i64::MAX);
        let started_at = now.saturating_sub(carried);
        self.state = TimerState::Running {
            label: label.to_string(),
            started_at,
        };
        Ok(started_at)
    }

    pub fn stop(&mut self, now: i64) -> Result<FinishedSession, TrackerError> {
        let TimerState::Running { label, started_at } = &self.state else {
            return Err(TrackerError::InvalidState {
                action: "stop",
                status: TimerStatus::Idle,
            });
        };

        // A clock that stepped backwards must not produce an entry ending before it started.
        let ended_at = now.max(*started_at);
        let session = FinishedSession {
            label: label.clone(),
            started_at: *started_at,
            ended_at,
            duration: elapsed_between(*started_at, ended_at),
        };
        self.state = TimerState::Idle { elapsed: 0 };
        Ok(session)
    }

    /// Returns the discarded elapsed time.
    pub fn reset(&mut self, now: i64) -> u64 {
        let discarded = self.elapsed(now);
        self.state = TimerState::Idle { elapsed: 0 };
        discarded
    }
}

fn elapsed_between(started_at: i64, now: i64) -> u64 {
    u64::try_from(now.saturating_sub(started_at)).unwrap_or(0)
}

#[cfg(test)]
mod timer_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn running_timer() -> Timer {
        let mut timer = Timer::new();
        timer.start("Projekt A", 1_000).expect("start failed");
        timer
    }

    #[rstest]
    fn it_should_start_idle_with_nothing_elapsed() {
        let timer = Timer::new();
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.elapsed(123_456), 0);
        assert_eq!(timer.label(), None);
    }

    #[rstest]
    fn it_should_start_running_with_a_trimmed_label(running_timer: Timer) {
        assert_eq!(running_timer.status(), TimerStatus::Running);
        assert_eq!(running_timer.label(), Some("Projekt A"));
        assert_eq!(running_timer.elapsed(3_500), 2_500);

        let mut timer = Timer::new();
        timer.start("  Projekt B \n", 0).unwrap();
        assert_eq!(timer.label(), Some("Projekt B"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn it_should_reject_an_empty_label(#[case] label: &str) {
        let mut timer = Timer::new();
        let result = timer.start(label, 0);
        assert_eq!(
            result,
            Err(TrackerError::Validation(ValidationError::EmptyLabel))
        );
        assert_eq!(timer, Timer::new());
    }

    #[rstest]
    fn it_should_refuse_to_start_twice(mut running_timer: Timer) {
        let before = running_timer.clone();
        let result = running_timer.start("Projekt B", 2_000);
        assert_eq!(
            result,
            Err(TrackerError::InvalidState {
                action: "start",
                status: TimerStatus::Running,
            })
        );
        assert_eq!(running_timer, before);
    }

    #[rstest]
    fn it_should_carry_idle_elapsed_time_into_the_next_start() {
        let mut timer = Timer::with_elapsed(30_000);
        let started_at = timer.start("Projekt A", 100_000).unwrap();
        assert_eq!(started_at, 70_000);
        assert_eq!(timer.elapsed(100_000), 30_000);
    }

    #[rstest]
    fn it_should_finish_a_session_on_stop(mut running_timer: Timer) {
        let session = running_timer.stop(6_000).expect("stop failed");
        assert_eq!(
            session,
            FinishedSession {
                label: "Projekt A".into(),
                started_at: 1_000,
                ended_at: 6_000,
                duration: 5_000,
            }
        );
        assert_eq!(running_timer.state(), &TimerState::Idle { elapsed: 0 });
    }

    #[rstest]
    fn it_should_not_end_before_it_started(mut running_timer: Timer) {
        let session = running_timer.stop(500).unwrap();
        assert_eq!(session.ended_at, session.started_at);
        assert_eq!(session.duration, 0);
    }

    #[rstest]
    fn it_should_refuse_to_stop_when_idle() {
        let mut timer = Timer::new();
        assert_eq!(
            timer.stop(1_000),
            Err(TrackerError::InvalidState {
                action: "stop",
                status: TimerStatus::Idle,
            })
        );
        assert_eq!(timer, Timer::new());
    }

    #[rstest]
    fn it_should_discard_elapsed_time_on_reset(mut running_timer: Timer) {
        assert_eq!(running_timer.reset(91_000), 90_000);
        assert_eq!(running_timer.state(), &TimerState::Idle { elapsed: 0 });

        let mut carried = Timer::with_elapsed(12_000);
        assert_eq!(carried.reset(0), 12_000);
        assert_eq!(carried.elapsed(0), 0);
    }

    #[rstest]
    fn it_should_snapshot_the_live_state(running_timer: Timer) {
        assert_eq!(
            running_timer.snapshot(66_000),
            TimerSnapshot {
                status: TimerStatus::Running,
                label: Some("Projekt A".into()),
                elapsed: 65_000,
                display: "00:01:05".into(),
            }
        );
        assert_eq!(Timer::new().snapshot(66_000), TimerSnapshot::idle(0));
    }
}
