use crate::{BurndownMember, BurndownPoint, MilestoneBurndown};

use std::collections::BTreeMap;

use googletest::assert_that;
use googletest::prelude::{anything, err};
use serde_json::json;

fn sample() -> MilestoneBurndown {
    MilestoneBurndown {
        title: "v1".to_string(),
        number: 3,
        total_issues: 2,
        members: vec![
            BurndownMember {
                name: "danny".to_string(),
                color: "#4e79a7".to_string(),
            },
            BurndownMember {
                name: "unassigned".to_string(),
                color: "#f28e2b".to_string(),
            },
        ],
        data_points: vec![BurndownPoint {
            date: "2026-02-18".to_string(),
            remaining: 2,
            by_member: BTreeMap::from([("danny".to_string(), 1), ("unassigned".to_string(), 1)]),
        }],
        due_date: None,
    }
}

#[test]
fn test_milestone_burndown_serializes_parallel_member_lists() {
    let value = serde_json::to_value(sample()).unwrap();

    assert_eq!(value["memberNames"], json!(["danny", "unassigned"]));
    assert_eq!(value["memberColors"], json!(["#4e79a7", "#f28e2b"]));
    assert_eq!(value["totalIssues"], json!(2));
    assert_eq!(value["dataPoints"][0]["byMember"]["danny"], json!(1));
    assert_eq!(value["dueDate"], json!(null));
}

#[test]
fn test_milestone_burndown_reads_back_paired_members() {
    let json = serde_json::to_string(&sample()).unwrap();

    let parsed: MilestoneBurndown = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, sample());
}

#[test]
fn given_mismatched_member_lists_when_deserialized_then_error() {
    // Given
    let json = json!({
        "title": "v1",
        "number": 3,
        "totalIssues": 1,
        "memberNames": ["danny", "unassigned"],
        "memberColors": ["#4e79a7"],
        "dataPoints": []
    });

    // When
    let result = serde_json::from_value::<MilestoneBurndown>(json);

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn test_empty_milestone_burndown() {
    let empty = MilestoneBurndown::empty("v2", 4, Some("2026-03-01".to_string()));

    assert_eq!(empty.total_issues, 0);
    assert!(empty.member_names().is_empty());
    assert!(empty.member_colors().is_empty());
    assert!(empty.data_points.is_empty());
    assert_eq!(empty.due_date.as_deref(), Some("2026-03-01"));
}
