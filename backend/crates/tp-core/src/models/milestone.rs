use crate::Issue;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub title: String,
    pub number: u64,
    #[serde(default)]
    pub due_on: Option<String>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}
