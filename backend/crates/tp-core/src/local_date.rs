//! Calendar-date helpers that stay in the caller's time zone.
//!
//! A bare `YYYY-MM-DD` string names a calendar day, not an instant. Parsing it
//! as UTC midnight shifts it to the previous day anywhere west of Greenwich, so
//! every date-only value in this crate goes through [`parse_local_date`], which
//! anchors it at local midnight instead.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use error_location::ErrorLocation;

/// `chrono` format string for a calendar-date key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

const DATE_KEY_LEN: usize = 10;
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a date or timestamp string into an instant in `tz`.
///
/// - `YYYY-MM-DD` resolves to local midnight of that day.
/// - RFC 3339 timestamps keep their explicit offset and are converted into `tz`.
/// - Timestamps without an offset are read as local wall-clock time.
#[track_caller]
pub fn parse_local_date<Tz: TimeZone>(value: &str, tz: &Tz) -> CoreResult<DateTime<Tz>> {
    let trimmed = value.trim();

    if trimmed.len() == DATE_KEY_LEN
        && let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_KEY_FORMAT)
    {
        return local_midnight(date, tz).ok_or_else(|| invalid_date(value));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(tz));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .and_then(|naive| resolve_local(naive, tz))
        .ok_or_else(|| invalid_date(value))
}

/// Render the local calendar day of `instant` as `YYYY-MM-DD`.
pub fn format_local_date_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    date_key(instant.date_naive())
}

/// Render a calendar day as `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse `value` and return the calendar day it falls on in `tz`.
#[track_caller]
pub fn local_day<Tz: TimeZone>(value: &str, tz: &Tz) -> CoreResult<NaiveDate> {
    parse_local_date(value, tz).map(|instant| instant.date_naive())
}

/// First instant of `date` in `tz`.
///
/// Midnight can fall inside a DST gap in some zones; the earliest valid
/// instant of the day is returned in that case.
pub fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    resolve_local(date.and_hms_opt(0, 0, 0)?, tz)
}

fn resolve_local<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Some(instant),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        // Gaps are at most a couple of hours; walk forward in half-hour steps.
        LocalResult::None => (1..=6).find_map(|step| {
            tz.from_local_datetime(&(naive + TimeDelta::minutes(30 * step)))
                .earliest()
        }),
    }
}

#[track_caller]
fn invalid_date(value: &str) -> CoreError {
    CoreError::InvalidDate {
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
