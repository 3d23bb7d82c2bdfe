// Corrections applied to an existing time entry.
//
// Responsibilities
// - Accept a new duration as HH:MM:SS, or a new start/end range.
// - Keep `end_time = start_time + duration` and never allow a negative duration.
// - Leave the entry untouched when validation fails.

use crate::modules::time_entries::core::duration_format;
use crate::modules::time_entries::core::errors::{FormatError, TrackerError};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::clock::date_of;

pub fn validate_and_apply(entry: &mut TimeEntry, time_string: &str) -> Result<(), TrackerError> {
    let duration = duration_format::parse(time_string)?;
    let end_time = i64::try_from(duration)
        .ok()
        .and_then(|duration| entry.start_time.checked_add(duration))
        .ok_or(FormatError::Overflow)?;

    entry.duration = duration;
    entry.end_time = end_time;
    Ok(())
}

pub fn is_valid_range(start_time: i64, end_time: i64) -> bool {
    end_time >= start_time
}

pub fn calculate_duration(start_time: i64, end_time: i64) -> Result<u64, TrackerError> {
    if !is_valid_range(start_time, end_time) {
        return Err(TrackerError::NegativeDuration {
            start_time,
            end_time,
        });
    }
    Ok(end_time.abs_diff(start_time))
}

pub fn edit_session(entry: &mut TimeEntry, start_time: i64, end_time: i64) -> Result<(), TrackerError> {
    let duration = calculate_duration(start_time, end_time)?;

    entry.start_time = start_time;
    entry.end_time = end_time;
    entry.duration = duration;
    entry.date = date_of(start_time);
    Ok(())
}
