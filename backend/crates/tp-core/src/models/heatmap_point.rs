use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub member: String,
    /// Participation relative to the most active participant, in `[0.0, 1.0]`.
    pub level: f64,
}
