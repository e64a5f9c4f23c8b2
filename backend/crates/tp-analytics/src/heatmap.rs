use crate::HEATMAP_WINDOW_DAYS;

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, TimeZone};
use log::debug;
use tp_core::{HeatmapPoint, LogEntry, Member, parse_local_date};

/// Relative participation per member over the trailing week.
///
/// Each log entry dated at or after `now - 7 days` adds one to the count of
/// every participant named in it. Levels are normalized against the busiest
/// participant, who need not be a listed member. Names must match exactly,
/// including case. Output follows the order of `members`.
pub fn build_activity_heatmap<Tz: TimeZone>(
    members: &[Member],
    log_entries: &[LogEntry],
    now: &DateTime<Tz>,
) -> Vec<HeatmapPoint> {
    let tz = now.timezone();
    let window_start = now.clone() - TimeDelta::days(HEATMAP_WINDOW_DAYS);

    let mut participation: HashMap<&str, usize> = HashMap::new();
    for entry in log_entries {
        let entry_date = match parse_local_date(&entry.date, &tz) {
            Ok(date) => date,
            Err(e) => {
                debug!("heatmap: skipping log entry: {e}");
                continue;
            }
        };
        if entry_date < window_start {
            continue;
        }
        for participant in &entry.participants {
            *participation.entry(participant.as_str()).or_insert(0) += 1;
        }
    }

    let busiest = participation.values().copied().max().unwrap_or(0);

    members
        .iter()
        .map(|member| {
            let count = participation.get(member.name.as_str()).copied().unwrap_or(0);
            let level = if busiest == 0 {
                0.0
            } else {
                count as f64 / busiest as f64
            };
            HeatmapPoint {
                member: member.name.clone(),
                level,
            }
        })
        .collect()
}
