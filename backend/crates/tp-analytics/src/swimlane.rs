use chrono::{DateTime, TimeZone};
use tp_core::{
    CompletableWork, Member, Swimlane, SwimlaneTask, Task, date_key, format_local_date_key,
    local_day,
};

/// One lane per member holding the tasks they own, earliest start first.
///
/// Tasks without a usable start date start "today". A task's end date is its
/// completion day, or `None` while it has no completion timestamp. Tasks whose
/// owner is not on the roster are dropped.
pub fn build_activity_swimlanes<Tz: TimeZone>(
    members: &[Member],
    tasks: &[Task],
    now: &DateTime<Tz>,
) -> Vec<Swimlane> {
    let tz = now.timezone();
    let today = format_local_date_key(now);

    members
        .iter()
        .map(|member| {
            let mut lane_tasks: Vec<SwimlaneTask> = tasks
                .iter()
                .filter(|task| task.owner() == Some(member.name.as_str()))
                .map(|task| SwimlaneTask {
                    id: task.id.clone(),
                    title: task.title.clone(),
                    start_date: task
                        .started_at
                        .as_deref()
                        .and_then(|raw| local_day(raw, &tz).ok())
                        .map(date_key)
                        .unwrap_or_else(|| today.clone()),
                    end_date: task
                        .completed_at
                        .as_deref()
                        .and_then(|raw| local_day(raw, &tz).ok())
                        .map(date_key),
                    status: task.status,
                })
                .collect();

            // YYYY-MM-DD keys order chronologically as plain strings.
            lane_tasks.sort_by(|a, b| a.start_date.cmp(&b.start_date));

            Swimlane {
                member: member.name.clone(),
                role: member.role.clone(),
                tasks: lane_tasks,
            }
        })
        .collect()
}
