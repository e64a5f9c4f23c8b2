use crate::IssueState;
use crate::models::completable_work::CompletableWork;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Snapshot of an issue from the external tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub state: IssueState,

    pub created_at: String,
    #[serde(default)]
    pub closed_at: Option<String>,

    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Issue {
    pub fn new(number: u64, title: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            state: IssueState::Open,
            created_at: created_at.into(),
            closed_at: None,
            assignee: None,
            labels: Vec::new(),
            url: None,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }
}

impl CompletableWork for Issue {
    fn work_id(&self) -> Cow<'_, str> {
        Cow::Owned(format!("#{}", self.number))
    }

    fn is_completed(&self) -> bool {
        self.is_closed()
    }

    fn completed_at(&self) -> Option<&str> {
        self.closed_at.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.assignee.as_deref()
    }
}
