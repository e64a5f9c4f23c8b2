use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurndownPoint {
    pub date: String,
    pub remaining: usize,
    /// Open issues per attributed member. Every member of the milestone has
    /// an entry, zero included.
    pub by_member: BTreeMap<String, usize>,
}
