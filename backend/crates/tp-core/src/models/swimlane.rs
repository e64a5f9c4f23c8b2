use crate::TaskStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwimlaneTask {
    pub id: String,
    pub title: String,
    pub start_date: String,
    /// `None` while the task is still open.
    pub end_date: Option<String>,
    pub status: TaskStatus,
}

/// One member's tasks, ordered by start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swimlane {
    pub member: String,
    pub role: String,
    pub tasks: Vec<SwimlaneTask>,
}
