//! Temporal analytics over a team's tasks, issues and session logs.
//!
//! Every builder is a pure function of its inputs and an explicit `now`;
//! none of them read the system clock, touch the filesystem or keep state
//! between calls.

mod burndown;
mod dashboard;
mod heatmap;
mod swimlane;
mod velocity;

pub use burndown::{attributed_member, build_milestone_burndown, build_milestone_burndown_for};
pub use dashboard::{DashboardOptions, build_dashboard};
pub use heatmap::build_activity_heatmap;
pub use swimlane::build_activity_swimlanes;
pub use velocity::build_velocity_timeline;

/// Trailing window, in days, covered by the velocity timeline.
pub const VELOCITY_WINDOW_DAYS: i64 = 30;

/// Trailing window, in days, counted by the activity heatmap.
pub const HEATMAP_WINDOW_DAYS: i64 = 7;

/// Member bucket for issues with neither a squad label nor an assignee.
pub const UNASSIGNED_MEMBER: &str = "unassigned";

/// Burndown series colors, assigned in member order and reused cyclically.
pub const MEMBER_PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

#[cfg(test)]
mod tests;
