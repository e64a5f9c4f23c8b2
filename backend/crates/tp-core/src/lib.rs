pub mod error;
pub mod local_date;
pub mod models;
pub mod task_id;

pub use error::{CoreError, CoreResult};
pub use local_date::{date_key, format_local_date_key, local_day, local_midnight, parse_local_date};
pub use models::burndown_point::BurndownPoint;
pub use models::completable_work::CompletableWork;
pub use models::dashboard::{DashboardData, DashboardInput};
pub use models::decision::Decision;
pub use models::heatmap_point::HeatmapPoint;
pub use models::issue::Issue;
pub use models::issue_state::IssueState;
pub use models::log_entry::LogEntry;
pub use models::member::Member;
pub use models::milestone::Milestone;
pub use models::milestone_burndown::{BurndownMember, MilestoneBurndown};
pub use models::swimlane::{Swimlane, SwimlaneTask};
pub use models::task::Task;
pub use models::task_source::TaskSource;
pub use models::task_status::TaskStatus;
pub use models::velocity_point::VelocityPoint;
pub use models::velocity_source::VelocitySource;
pub use task_id::synthetic_task_id;

#[cfg(test)]
mod tests;
