//! Duration parsing and display helpers.
//!
//! The downloader reports each video's length as `SS`, `MM:SS` or `HH:MM:SS`.
//! This module turns those strings into whole seconds, sums them, and renders
//! a total back as hours and minutes for the report.

use crate::error::{CoreError, CoreResult, parse_error};

/// Parses a `SS`, `MM:SS` or `HH:MM:SS` duration into whole seconds.
///
/// The rightmost field is seconds, the next minutes, the next hours. Fields are
/// not range-checked, so `"1:75"` is 135 seconds. Surrounding whitespace is
/// ignored; anything else that is not a plain non-negative integer is rejected.
pub fn parse_duration(duration: &str) -> CoreResult<u64> {
    let trimmed = duration.trim();
    let fields: Vec<&str> = trimmed.split(':').collect();

    let (hours, minutes, seconds) = match fields.as_slice() {
        [s] => ("0", "0", *s),
        [m, s] => ("0", *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => {
            return Err(parse_error(
                duration,
                format!("expected 1 to 3 colon-separated fields, found {}", fields.len()),
            ));
        }
    };

    let hours = parse_field(duration, hours)?;
    let minutes = parse_field(duration, minutes)?;
    let seconds = parse_field(duration, seconds)?;

    hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(|| parse_error(duration, "value is too large"))
}

/// Parses one field; `u64::from_str` would accept a leading `+`, so digits are checked first.
fn parse_field(duration: &str, field: &str) -> CoreResult<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error(
            duration,
            format!("field '{}' is not a non-negative integer", field),
        ));
    }
    field
        .parse::<u64>()
        .map_err(|_| parse_error(duration, format!("field '{}' is too large", field)))
}

/// Parses every duration line and returns the summed seconds.
///
/// The first malformed line aborts the whole sum; the error carries its
/// 1-based line number.
pub fn total_seconds<S: AsRef<str>>(durations: &[S]) -> CoreResult<u64> {
    durations
        .iter()
        .enumerate()
        .try_fold(0u64, |acc, (index, line)| {
            let seconds = parse_duration(line.as_ref()).map_err(|e| CoreError::ParseLine {
                line: index + 1,
                source: Box::new(e),
            })?;
            acc.checked_add(seconds)
                .ok_or(CoreError::Overflow(durations.len()))
        })
}

/// Formats seconds as `"{h} hours {m} minutes"`, dropping leftover seconds.
#[must_use]
pub fn format_hours_minutes(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours} hours {minutes} minutes")
}
