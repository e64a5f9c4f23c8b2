use crate::local_date::DATE_KEY_FORMAT;
use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;

/// Deterministic id for a task extracted from a session-log paragraph.
///
/// Format: `<YYYY-MM-DD>-<member>`, member lowercased with runs of whitespace
/// collapsed to a single `-`. Re-parsing the same log yields the same id.
#[track_caller]
pub fn synthetic_task_id(date: &str, member: &str) -> CoreResult<String> {
    let date = date.trim();
    if NaiveDate::parse_from_str(date, DATE_KEY_FORMAT).is_err() {
        return Err(CoreError::InvalidDate {
            value: date.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let slug = member
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        return Err(CoreError::Validation {
            message: "member name is empty".to_string(),
            field: Some("member".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(format!("{date}-{slug}"))
}
