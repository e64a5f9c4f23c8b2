use serde::{Deserialize, Serialize};

/// Where a task record was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSource {
    /// Derived from prose in a session log.
    SessionLog,
    /// Read from a structured task list.
    #[default]
    Tracker,
}
