use crate::models::completable_work::CompletableWork;
use crate::{TaskSource, TaskStatus};

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,

    // Workflow
    #[serde(default)]
    pub status: TaskStatus,

    // Assignment
    #[serde(default)]
    pub owner: Option<String>,

    // Timeline
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,

    #[serde(default)]
    pub source: TaskSource,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::Pending,
            owner: None,
            started_at: None,
            completed_at: None,
            source: TaskSource::Tracker,
        }
    }
}

impl CompletableWork for Task {
    fn work_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    fn completed_at(&self) -> Option<&str> {
        self.completed_at.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}
