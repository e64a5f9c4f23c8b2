use crate::{Issue, IssueState};

use std::str::FromStr;

#[test]
fn test_issue_state_from_str_ignores_case() {
    assert_eq!(IssueState::from_str("OPEN").unwrap(), IssueState::Open);
    assert_eq!(IssueState::from_str("closed").unwrap(), IssueState::Closed);
    assert!(IssueState::from_str("merged").is_err());
}

#[test]
fn test_issue_from_tracker_json() {
    let json = r#"{
        "number": 42,
        "title": "Ship it",
        "state": "CLOSED",
        "createdAt": "2026-02-01T09:00:00Z",
        "closedAt": "2026-02-03T17:00:00Z",
        "assignee": "danny",
        "labels": ["squad:danny", "bug"]
    }"#;

    let issue: Issue = serde_json::from_str(json).unwrap();

    assert_eq!(issue.number, 42);
    assert!(issue.is_closed());
    assert_eq!(issue.closed_at.as_deref(), Some("2026-02-03T17:00:00Z"));
    assert_eq!(issue.labels.len(), 2);
    assert_eq!(issue.url, None);
}
