use crate::VELOCITY_WINDOW_DAYS;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Days, NaiveDate, TimeDelta, TimeZone};
use log::{debug, trace};
use tp_core::{CompletableWork, Issue, Task, VelocityPoint, date_key, parse_local_date};

/// Daily completion counts for the trailing window ending today.
///
/// Always returns `VELOCITY_WINDOW_DAYS + 1` points, oldest first, one per
/// calendar day from `today - 30` through `today`. Completed tasks and closed
/// issues whose completion instant is at or after `now - 30 days` are counted
/// on their local calendar day. Issues are deduplicated by number, so the
/// same issue fetched through several collections counts once.
///
/// The lower bound compares instants, not calendar days: an item completed on
/// the oldest day is included or not depending on the time of day.
pub fn build_velocity_timeline<'a, Tz, T, I>(
    tasks: T,
    issues: I,
    now: &DateTime<Tz>,
) -> Vec<VelocityPoint>
where
    Tz: TimeZone,
    T: IntoIterator<Item = &'a Task>,
    I: IntoIterator<Item = &'a Issue>,
{
    let tz = now.timezone();
    let window_start = now.clone() - TimeDelta::days(VELOCITY_WINDOW_DAYS);

    let task_counts = count_completions(tasks, &window_start, &tz, false);
    let issue_counts = count_completions(issues, &window_start, &tz, true);

    let today = now.date_naive();
    let points: Vec<VelocityPoint> = (0..=VELOCITY_WINDOW_DAYS as u64)
        .rev()
        .map(|days_back| {
            let date = today - Days::new(days_back);
            let completed = task_counts.get(&date).copied().unwrap_or(0)
                + issue_counts.get(&date).copied().unwrap_or(0);
            VelocityPoint {
                date: date_key(date),
                completed,
            }
        })
        .collect();

    trace!(
        "velocity: {} task and {} issue completions in window",
        task_counts.values().sum::<usize>(),
        issue_counts.values().sum::<usize>()
    );

    points
}

/// Bucket in-window completions by local calendar day.
///
/// With `dedup`, an id is counted the first time it qualifies and ignored
/// afterwards. The seen-set lives only for this call.
fn count_completions<'a, W, Tz>(
    items: impl IntoIterator<Item = &'a W>,
    window_start: &DateTime<Tz>,
    tz: &Tz,
    dedup: bool,
) -> HashMap<NaiveDate, usize>
where
    W: CompletableWork + 'a,
    Tz: TimeZone,
{
    let mut counts = HashMap::new();
    let mut seen = HashSet::new();

    for item in items {
        if !item.is_completed() {
            continue;
        }
        let Some(raw) = item.completed_at() else {
            continue;
        };
        let completed_at = match parse_local_date(raw, tz) {
            Ok(instant) => instant,
            Err(e) => {
                debug!("velocity: skipping {}: {e}", item.work_id());
                continue;
            }
        };
        if completed_at < *window_start {
            continue;
        }
        if dedup && !seen.insert(item.work_id().into_owned()) {
            continue;
        }

        *counts.entry(completed_at.date_naive()).or_insert(0) += 1;
    }

    counts
}
