use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use tp_config::ConfigError;
use tp_core::CoreError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid --now value '{value}': {source}")]
    InvalidNow {
        value: String,
        #[source]
        source: CoreError,
    },

    #[error("Milestone #{number} not found in snapshot {location}")]
    MilestoneNotFound {
        number: u64,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn milestone_not_found(number: u64) -> Self {
        CliError::MilestoneNotFound {
            number,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = StdResult<T, CliError>;
