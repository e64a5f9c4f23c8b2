use crate::{ConfigError, ConfigErrorResult, DEFAULT_VELOCITY_SOURCE, VELOCITY_SOURCES};

use serde::Deserialize;

/// How the CLI composes and prints the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// `session_log` or `all_sources`
    pub velocity_source: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            velocity_source: String::from(DEFAULT_VELOCITY_SOURCE),
            pretty: false,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !VELOCITY_SOURCES.contains(&self.velocity_source.as_str()) {
            return Err(ConfigError::dashboard(format!(
                "dashboard.velocity_source must be one of {}, got {}",
                VELOCITY_SOURCES.join(", "),
                self.velocity_source
            )));
        }

        Ok(())
    }
}
