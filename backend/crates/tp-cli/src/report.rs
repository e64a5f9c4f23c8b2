use crate::{CliError, CliResult, Commands};

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use serde_json::Value;
use tp_analytics::{
    DashboardOptions, build_activity_heatmap, build_activity_swimlanes, build_dashboard,
    build_milestone_burndown_for, build_velocity_timeline,
};
use tp_core::{DashboardInput, MilestoneBurndown};

/// Run one subcommand over a snapshot and return its JSON document.
pub fn run_command<Tz: TimeZone>(
    command: &Commands,
    input: &DashboardInput,
    options: &DashboardOptions,
    now: &DateTime<Tz>,
) -> CliResult<Value> {
    match command {
        Commands::Dashboard => to_json(&build_dashboard(input, options, now)),
        Commands::Velocity => to_json(&build_velocity_timeline(
            input.velocity_tasks(options.velocity_source),
            input.issue_snapshots(),
            now,
        )),
        Commands::Heatmap => to_json(&build_activity_heatmap(
            &input.members,
            &input.log_entries,
            now,
        )),
        Commands::Swimlanes => to_json(&build_activity_swimlanes(
            &input.members,
            &input.tasks,
            now,
        )),
        Commands::Burndown {
            milestone: Some(number),
        } => {
            let milestone = input
                .milestone(*number)
                .ok_or_else(|| CliError::milestone_not_found(*number))?;
            to_json(&build_milestone_burndown_for(milestone, now))
        }
        Commands::Burndown { milestone: None } => {
            let burndowns: Vec<MilestoneBurndown> = input
                .milestones
                .iter()
                .map(|milestone| build_milestone_burndown_for(milestone, now))
                .collect();
            to_json(&burndowns)
        }
    }
}

/// Serialize a report for stdout.
pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    output.map_err(CliError::from_json)
}

fn to_json<T: Serialize>(report: &T) -> CliResult<Value> {
    serde_json::to_value(report).map_err(CliError::from_json)
}
