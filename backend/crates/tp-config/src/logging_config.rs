use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colorize level names when logging to the terminal.
    pub colored: bool,
    /// Append to this file instead of writing to stderr.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        if file.trim().is_empty() {
            return Err(ConfigError::logging("logging.file cannot be empty"));
        }

        if Path::new(file)
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(ConfigError::logging(format!(
                "logging.file cannot contain '..', got {file}"
            )));
        }

        Ok(())
    }
}
