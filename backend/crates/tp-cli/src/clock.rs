use crate::{CliError, CliResult};

use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use tp_core::parse_local_date;

/// The instant every report is computed against.
///
/// `pinned` accepts anything [`parse_local_date`] does; a bare day pins the
/// clock to local midnight. Without it the wall clock is read once here.
pub fn resolve_now<Tz: TimeZone>(pinned: Option<&str>, tz: &Tz) -> CliResult<DateTime<Tz>> {
    let Some(raw) = pinned else {
        return Ok(Utc::now().with_timezone(tz));
    };

    let now = parse_local_date(raw, tz).map_err(|source| CliError::InvalidNow {
        value: raw.to_string(),
        source,
    })?;
    debug!("clock pinned to {}", now.naive_local());

    Ok(now)
}
