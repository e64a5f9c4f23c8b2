mod config;
mod dashboard_config;
mod error;
mod log_level;
mod logging_config;

pub use config::Config;
pub use dashboard_config::DashboardConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "TP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".team-pulse";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_VELOCITY_SOURCE: &str = "all_sources";
const VELOCITY_SOURCES: [&str; 2] = ["session_log", "all_sources"];

#[cfg(test)]
mod tests;
