mod completable_work;
mod dashboard_input;
mod issue_state;
mod milestone_burndown;
mod task_status;
