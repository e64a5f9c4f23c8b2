use crate::TaskStatus;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};

#[test]
fn test_task_status_as_str() {
    assert_eq!(TaskStatus::Pending.as_str(), "pending");
    assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
    assert_eq!(TaskStatus::Completed.as_str(), "completed");
}

#[test]
fn test_task_status_from_str_accepts_parser_spellings() {
    assert_eq!(TaskStatus::from_str("done").unwrap(), TaskStatus::Completed);
    assert_eq!(
        TaskStatus::from_str("In-Progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::Pending);
    assert!(TaskStatus::from_str("abandoned").is_err());
}

#[test]
fn test_task_status_default() {
    assert_eq!(TaskStatus::default(), TaskStatus::Pending);
}

#[test]
fn given_json_status_when_deserialized_then_uses_lenient_parsing() {
    // When
    let status: TaskStatus = serde_json::from_str("\"COMPLETED\"").unwrap();

    // Then
    assert_that!(status, eq(TaskStatus::Completed));
}

#[test]
fn given_unknown_json_status_when_deserialized_then_error() {
    // When
    let result = serde_json::from_str::<TaskStatus>("\"someday\"");

    // Then
    assert_that!(result, err(anything()));
}
