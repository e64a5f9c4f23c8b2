use crate::{
    Decision, HeatmapPoint, Issue, LogEntry, Member, Milestone, MilestoneBurndown, Swimlane, Task,
    TaskSource, VelocityPoint, VelocitySource,
};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Everything the upstream parsers and tracker client produced for one team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardInput {
    pub members: Vec<Member>,
    pub log_entries: Vec<LogEntry>,
    pub tasks: Vec<Task>,
    /// Issues grouped by the member they were fetched for. The same issue may
    /// appear under several members.
    pub member_issues: BTreeMap<String, Vec<Issue>>,
    /// Recently closed issues fetched independently of any member.
    pub closed_issues: Vec<Issue>,
    pub milestones: Vec<Milestone>,
    pub decisions: Vec<Decision>,
}

impl DashboardInput {
    /// Tasks that count toward velocity under `source`.
    pub fn velocity_tasks(&self, source: VelocitySource) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| match source {
            VelocitySource::AllSources => true,
            VelocitySource::SessionLog => task.source == TaskSource::SessionLog,
        })
    }

    /// Every issue snapshot in the input, duplicates included.
    pub fn issue_snapshots(&self) -> impl Iterator<Item = &Issue> {
        self.member_issues
            .values()
            .flatten()
            .chain(&self.closed_issues)
    }

    pub fn milestone(&self, number: u64) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.number == number)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub velocity: Vec<VelocityPoint>,
    pub heatmap: Vec<HeatmapPoint>,
    pub swimlanes: Vec<Swimlane>,
    pub burndowns: Vec<MilestoneBurndown>,
    pub decisions: Vec<Decision>,
}
