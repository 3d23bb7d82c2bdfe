// Error taxonomy for the tracker core.
//
// - FormatError: a duration string that is not HH:MM:SS.
// - ValidationError: user input rejected before any state changes.
// - TrackerError: what an operation on the tracker can fail with.
//
// Persistence failures are not part of this taxonomy: they are absorbed where they happen.

use crate::modules::time_entries::core::timer::TimerStatus;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected HH:MM:SS, got {0:?}")]
    WrongShape(String),

    #[error("{unit} is not a number: {value:?}")]
    NotNumeric { unit: &'static str, value: String },

    #[error("{unit} must be between 0 and 59, got {value}")]
    OutOfRange { unit: &'static str, value: u64 },

    #[error("duration is too large")]
    Overflow,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("label must not be empty")]
    EmptyLabel,

    #[error("project name must not be empty")]
    EmptyProjectName,

    #[error(transparent)]
    Format(#[from] FormatError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Duration cannot be negative")]
    NegativeDuration { start_time: i64, end_time: i64 },

    #[error("cannot {action} while the timer is {status}")]
    InvalidState {
        action: &'static str,
        status: TimerStatus,
    },

    #[error("no time entry with id {0}")]
    EntryNotFound(u64),
}

impl From<FormatError> for TrackerError {
    fn from(error: FormatError) -> Self {
        TrackerError::Validation(ValidationError::Format(error))
    }
}

#[cfg(test)]
mod tracker_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_surface_format_errors_as_validation_errors() {
        let error: TrackerError = FormatError::WrongShape("1:2".into()).into();
        assert!(matches!(
            error,
            TrackerError::Validation(ValidationError::Format(FormatError::WrongShape(_)))
        ));
        assert_eq!(error.to_string(), "expected HH:MM:SS, got \"1:2\"");
    }

    #[rstest]
    fn it_should_describe_a_negative_duration() {
        let error = TrackerError::NegativeDuration {
            start_time: 2_000,
            end_time: 1_000,
        };
        assert_eq!(error.to_string(), "Duration cannot be negative");
    }

    #[rstest]
    fn it_should_describe_an_invalid_state() {
        let error = TrackerError::InvalidState {
            action: "start",
            status: TimerStatus::Running,
        };
        assert_eq!(error.to_string(), "cannot start while the timer is running");
    }
}
