
use chrono::{DateTime, Days, FixedOffset, TimeZone};
use tp_core::{Issue, IssueState, Member, Task, TaskStatus, date_key};

/// US Eastern standard time, west of UTC so date-only values would shift a
/// day if they were ever read as UTC midnight.
pub(crate) fn eastern() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

/// Pinned clock: 2026-02-18 15:00 local.
pub(crate) fn now() -> DateTime<FixedOffset> {
    eastern().with_ymd_and_hms(2026, 2, 18, 15, 0, 0).unwrap()
}

/// Calendar-date key `days` before the pinned today.
pub(crate) fn days_ago(days: u64) -> String {
    date_key(now().date_naive() - Days::new(days))
}

/// Calendar-date key `days` after the pinned today.
pub(crate) fn days_ahead(days: u64) -> String {
    date_key(now().date_naive() + Days::new(days))
}

pub(crate) fn member(name: &str) -> Member {
    Member::new(name, "engineer")
}

pub(crate) fn completed_task(id: &str, owner: &str, completed_at: &str) -> Task {
    let mut task = Task::new(id, format!("Task {id}"));
    task.status = TaskStatus::Completed;
    task.owner = Some(owner.to_string());
    task.completed_at = Some(completed_at.to_string());
    task
}

pub(crate) fn open_issue(number: u64, created_at: &str) -> Issue {
    Issue::new(number, format!("Issue {number}"), created_at)
}

pub(crate) fn closed_issue(number: u64, created_at: &str, closed_at: &str) -> Issue {
    let mut issue = open_issue(number, created_at);
    issue.state = IssueState::Closed;
    issue.closed_at = Some(closed_at.to_string());
    issue
}
