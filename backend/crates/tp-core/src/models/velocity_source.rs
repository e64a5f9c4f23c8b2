use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which tasks feed the velocity timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocitySource {
    /// Only tasks extracted from session logs.
    SessionLog,
    /// Every task regardless of where it was extracted from.
    #[default]
    AllSources,
}

impl VelocitySource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SessionLog => "session_log",
            Self::AllSources => "all_sources",
        }
    }
}

impl FromStr for VelocitySource {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "session_log" => Ok(Self::SessionLog),
            "all_sources" => Ok(Self::AllSources),
            _ => Err(CoreError::InvalidVelocitySource {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
