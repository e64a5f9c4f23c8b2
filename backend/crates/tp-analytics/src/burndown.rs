use crate::{MEMBER_PALETTE, UNASSIGNED_MEMBER};

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, TimeZone};
use log::{debug, trace, warn};
use tp_core::{
    BurndownMember, BurndownPoint, Issue, Milestone, MilestoneBurndown, date_key, local_day,
};

const SQUAD_LABEL_PREFIX: &str = "squad:";

/// An issue reduced to what the daily walk needs.
struct TrackedIssue {
    member: String,
    created: NaiveDate,
    closed: Option<NaiveDate>,
}

/// Remaining open issues per day for one milestone, stacked by member.
///
/// The series starts on the day the earliest issue was created. A milestone
/// whose issues are all closed ends on the last close day; one with open
/// issues ends today. Either end is pushed out to `due_date` when that is
/// later. Issues only count from the day they were created, and stay closed
/// from the day they were closed.
pub fn build_milestone_burndown<Tz: TimeZone>(
    title: &str,
    number: u64,
    issues: &[Issue],
    due_date: Option<&str>,
    now: &DateTime<Tz>,
) -> MilestoneBurndown {
    let due_date_raw = due_date.map(str::to_string);
    if issues.is_empty() {
        return MilestoneBurndown::empty(title, number, due_date_raw);
    }

    let tz = now.timezone();
    let members = order_members(issues.iter().map(attributed_member).collect());

    let tracked: Vec<TrackedIssue> = issues
        .iter()
        .filter_map(|issue| track_issue(issue, &tz))
        .collect();

    let data_points = match date_range(&tracked, due_date, now) {
        Some((start, end)) => walk_days(&tracked, &members, start, end),
        None => Vec::new(),
    };

    trace!(
        "burndown: milestone #{number} has {} issues, {} members, {} days",
        issues.len(),
        members.len(),
        data_points.len()
    );

    MilestoneBurndown {
        title: title.to_string(),
        number,
        total_issues: issues.len(),
        members,
        data_points,
        due_date: due_date_raw,
    }
}

/// [`build_milestone_burndown`] over a tracker milestone record.
pub fn build_milestone_burndown_for<Tz: TimeZone>(
    milestone: &Milestone,
    now: &DateTime<Tz>,
) -> MilestoneBurndown {
    build_milestone_burndown(
        &milestone.title,
        milestone.number,
        &milestone.issues,
        milestone.due_on.as_deref(),
        now,
    )
}

/// The member an issue is stacked under.
///
/// A `squad:<name>` label (any casing) wins over the assignee. Both are
/// lowercased. Issues with neither fall under [`UNASSIGNED_MEMBER`].
pub fn attributed_member(issue: &Issue) -> String {
    issue
        .labels
        .iter()
        .find_map(|label| squad_label_member(label))
        .or_else(|| {
            issue
                .assignee
                .as_deref()
                .map(str::trim)
                .filter(|assignee| !assignee.is_empty())
                .map(str::to_lowercase)
        })
        .unwrap_or_else(|| UNASSIGNED_MEMBER.to_string())
}

fn squad_label_member(label: &str) -> Option<String> {
    let label = label.trim();
    let prefix = label.get(..SQUAD_LABEL_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(SQUAD_LABEL_PREFIX) {
        return None;
    }

    let name = label[SQUAD_LABEL_PREFIX.len()..].trim();
    (!name.is_empty()).then(|| name.to_lowercase())
}

/// Alphabetical, with the unassigned bucket always last, each paired with
/// its palette color.
fn order_members(names: BTreeSet<String>) -> Vec<BurndownMember> {
    let (mut ordered, unassigned): (Vec<String>, Vec<String>) = names
        .into_iter()
        .partition(|name| name != UNASSIGNED_MEMBER);
    ordered.extend(unassigned);

    ordered
        .into_iter()
        .enumerate()
        .map(|(index, name)| BurndownMember {
            name,
            color: MEMBER_PALETTE[index % MEMBER_PALETTE.len()].to_string(),
        })
        .collect()
}

fn track_issue<Tz: TimeZone>(issue: &Issue, tz: &Tz) -> Option<TrackedIssue> {
    let created = match local_day(&issue.created_at, tz) {
        Ok(day) => day,
        Err(e) => {
            warn!("burndown: issue #{} has no usable creation date: {e}", issue.number);
            return None;
        }
    };

    let closed = issue
        .closed_at
        .as_deref()
        .and_then(|raw| match local_day(raw, tz) {
            Ok(day) => Some(day),
            Err(e) => {
                debug!("burndown: treating issue #{} as open: {e}", issue.number);
                None
            }
        });

    Some(TrackedIssue {
        member: attributed_member(issue),
        created,
        closed,
    })
}

/// First and last day of the series, or `None` when no issue has a usable
/// creation date.
fn date_range<Tz: TimeZone>(
    tracked: &[TrackedIssue],
    due_date: Option<&str>,
    now: &DateTime<Tz>,
) -> Option<(NaiveDate, NaiveDate)> {
    let start = tracked.iter().map(|issue| issue.created).min()?;

    let last_close = tracked.iter().map(|issue| issue.closed).collect::<Option<Vec<_>>>();
    let base_end = match last_close {
        // Finished milestones stop where the work stopped.
        Some(closes) => closes.into_iter().max().unwrap_or(start),
        None => now.date_naive(),
    };

    let due = due_date.and_then(|raw| match local_day(raw, &now.timezone()) {
        Ok(day) => Some(day),
        Err(e) => {
            debug!("burndown: ignoring due date: {e}");
            None
        }
    });

    let end = match due {
        Some(due) if due > base_end => due,
        _ => base_end,
    };

    Some((start, end.max(start)))
}

fn walk_days(
    tracked: &[TrackedIssue],
    members: &[BurndownMember],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<BurndownPoint> {
    let mut closed_so_far = vec![false; tracked.len()];
    let mut points = Vec::new();

    for day in start.iter_days().take_while(|day| *day <= end) {
        for (issue, closed) in tracked.iter().zip(closed_so_far.iter_mut()) {
            if issue.closed == Some(day) {
                *closed = true;
            }
        }

        let mut by_member: BTreeMap<String, usize> = members
            .iter()
            .map(|member| (member.name.clone(), 0))
            .collect();
        let mut remaining = 0;

        for (issue, closed) in tracked.iter().zip(&closed_so_far) {
            if issue.created > day || *closed {
                continue;
            }
            remaining += 1;
            if let Some(count) = by_member.get_mut(&issue.member) {
                *count += 1;
            }
        }

        points.push(BurndownPoint {
            date: date_key(day),
            remaining,
            by_member,
        });
    }

    points
}
