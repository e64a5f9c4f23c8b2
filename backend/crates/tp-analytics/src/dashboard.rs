use crate::{
    build_activity_heatmap, build_activity_swimlanes, build_milestone_burndown_for,
    build_velocity_timeline,
};

use chrono::{DateTime, TimeZone};
use tp_core::{DashboardData, DashboardInput, VelocitySource};

/// Knobs the host may set when composing a dashboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardOptions {
    pub velocity_source: VelocitySource,
}

/// Run every builder over one team snapshot.
pub fn build_dashboard<Tz: TimeZone>(
    input: &DashboardInput,
    options: &DashboardOptions,
    now: &DateTime<Tz>,
) -> DashboardData {
    DashboardData {
        velocity: build_velocity_timeline(
            input.velocity_tasks(options.velocity_source),
            input.issue_snapshots(),
            now,
        ),
        heatmap: build_activity_heatmap(&input.members, &input.log_entries, now),
        swimlanes: build_activity_swimlanes(&input.members, &input.tasks, now),
        burndowns: input
            .milestones
            .iter()
            .map(|milestone| build_milestone_burndown_for(milestone, now))
            .collect(),
        decisions: input.decisions.clone(),
    }
}
