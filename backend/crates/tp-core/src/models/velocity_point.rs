use serde::{Deserialize, Serialize};

/// Completed work for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelocityPoint {
    pub date: String,
    pub completed: usize,
}
