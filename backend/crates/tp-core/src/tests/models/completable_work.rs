use crate::{CompletableWork, Issue, IssueState, Task, TaskStatus};

#[test]
fn test_task_exposes_shared_surface() {
    let mut task = Task::new("2026-02-18-danny", "Wire up the chart");
    task.status = TaskStatus::Completed;
    task.owner = Some("Danny".to_string());
    task.completed_at = Some("2026-02-18".to_string());

    assert_eq!(task.work_id(), "2026-02-18-danny");
    assert!(task.is_completed());
    assert_eq!(CompletableWork::completed_at(&task), Some("2026-02-18"));
    assert_eq!(CompletableWork::owner(&task), Some("Danny"));
}

#[test]
fn test_issue_exposes_shared_surface() {
    let mut issue = Issue::new(7, "Fix flaky test", "2026-02-01");
    assert!(!issue.is_completed());
    assert_eq!(CompletableWork::owner(&issue), None);

    issue.state = IssueState::Closed;
    issue.closed_at = Some("2026-02-02T12:00:00Z".to_string());
    issue.assignee = Some("rusty".to_string());

    assert_eq!(issue.work_id(), "#7");
    assert!(issue.is_completed());
    assert_eq!(
        CompletableWork::completed_at(&issue),
        Some("2026-02-02T12:00:00Z")
    );
    assert_eq!(CompletableWork::owner(&issue), Some("rusty"));
}

#[test]
fn test_task_and_issue_ids_do_not_collide() {
    let task = Task::new("7", "Numbered task");
    let issue = Issue::new(7, "Numbered issue", "2026-02-01");

    assert_ne!(task.work_id(), issue.work_id());
}
