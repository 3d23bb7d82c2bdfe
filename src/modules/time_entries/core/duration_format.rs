// Duration formatting and parsing.
//
// Boundaries
// - Pure functions. Durations are milliseconds unless the name says otherwise.
// - HH:MM:SS carries whole seconds only; sub-second remainders are truncated when formatting.

use crate::modules::time_entries::core::errors::FormatError;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// `HH:MM:SS` with at least two hour digits. Hours do not wrap at 24.
pub fn format(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Parses `HH:MM:SS` into milliseconds.
pub fn parse(input: &str) -> Result<u64, FormatError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(FormatError::WrongShape(trimmed.to_string()));
    };

    let hours = parse_part("hours", hours)?;
    let minutes = parse_part("minutes", minutes)?;
    let seconds = parse_part("seconds", seconds)?;

    if minutes > 59 {
        return Err(FormatError::OutOfRange {
            unit: "minutes",
            value: minutes,
        });
    }
    if seconds > 59 {
        return Err(FormatError::OutOfRange {
            unit: "seconds",
            value: seconds,
        });
    }

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes * MS_PER_MINUTE))
        .and_then(|total| total.checked_add(seconds * MS_PER_SECOND))
        .ok_or(FormatError::Overflow)
}

/// Compact `1h 5m 3s` rendering of a second count, dropping leading zero units.
pub fn format_human(seconds: u64) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn parse_part(unit: &'static str, raw: &str) -> Result<u64, FormatError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(FormatError::NotNumeric {
            unit,
            value: raw.to_string(),
        });
    }
    // Only digits remain, so the sole failure mode is a value past u64.
    raw.parse().map_err(|_| FormatError::Overflow)
}
