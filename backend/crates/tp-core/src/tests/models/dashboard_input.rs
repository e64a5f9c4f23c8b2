use crate::{DashboardInput, Issue, Milestone, Task, TaskSource, VelocitySource};

use std::collections::BTreeMap;

use googletest::assert_that;
use googletest::prelude::{eq, len};

fn input() -> DashboardInput {
    let mut session = Task::new("2026-02-17-danny", "From the log");
    session.source = TaskSource::SessionLog;
    let tracked = Task::new("T-1", "From the tracker");

    let shared = Issue::new(40, "Shared", "2026-02-10");

    DashboardInput {
        tasks: vec![session, tracked],
        member_issues: BTreeMap::from([
            ("danny".to_string(), vec![shared.clone()]),
            ("rusty".to_string(), vec![shared.clone(), Issue::new(41, "Solo", "2026-02-11")]),
        ]),
        closed_issues: vec![shared],
        milestones: vec![Milestone {
            title: "Sprint 1".to_string(),
            number: 3,
            due_on: None,
            issues: Vec::new(),
        }],
        ..DashboardInput::default()
    }
}

#[test]
fn given_all_sources_when_selecting_velocity_tasks_then_every_task_is_kept() {
    // When
    let count = input().velocity_tasks(VelocitySource::AllSources).count();

    // Then
    assert_that!(count, eq(2));
}

#[test]
fn given_session_log_source_when_selecting_velocity_tasks_then_tracker_tasks_are_dropped() {
    // Given
    let input = input();

    // When
    let ids: Vec<&str> = input
        .velocity_tasks(VelocitySource::SessionLog)
        .map(|task| task.id.as_str())
        .collect();

    // Then
    assert_eq!(ids, vec!["2026-02-17-danny"]);
}

#[test]
fn given_issue_in_several_collections_when_listing_snapshots_then_duplicates_are_kept() {
    // Given
    let input = input();

    // When
    let numbers: Vec<u64> = input.issue_snapshots().map(|issue| issue.number).collect();

    // Then
    assert_that!(numbers, len(eq(4)));
    assert_eq!(numbers.iter().filter(|n| **n == 40).count(), 3);
}

#[test]
fn given_milestone_number_when_looked_up_then_found_or_none() {
    // Given
    let input = input();

    // Then
    assert_eq!(input.milestone(3).map(|m| m.title.as_str()), Some("Sprint 1"));
    assert!(input.milestone(4).is_none());
}

#[test]
fn given_partial_snapshot_json_when_parsed_then_missing_collections_default() {
    // When
    let input: DashboardInput =
        serde_json::from_str(r#"{ "members": [{ "name": "Danny" }] }"#).unwrap();

    // Then
    assert_that!(input.members, len(eq(1)));
    assert_that!(input.members[0].role.as_str(), eq(""));
    assert!(input.member_issues.is_empty());
}
