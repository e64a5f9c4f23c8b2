use serde::{Deserialize, Serialize};

/// One dated session-log entry and the people who took part in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl LogEntry {
    pub fn new<I, S>(date: impl Into<String>, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            date: date.into(),
            participants: participants.into_iter().map(Into::into).collect(),
            title: None,
        }
    }
}
