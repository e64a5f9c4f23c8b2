pub mod burndown_point;
pub mod completable_work;
pub mod dashboard;
pub mod decision;
pub mod heatmap_point;
pub mod issue;
pub mod issue_state;
pub mod log_entry;
pub mod member;
pub mod milestone;
pub mod milestone_burndown;
pub mod swimlane;
pub mod task;
pub mod task_source;
pub mod task_status;
pub mod velocity_point;
pub mod velocity_source;
