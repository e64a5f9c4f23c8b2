use crate::{CliError, CliResult};

use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;
use tp_core::DashboardInput;

/// Path argument meaning "read the snapshot from stdin".
pub const STDIN_PATH: &str = "-";

/// Read a snapshot from `path`, or from stdin when `path` is absent or `-`.
pub fn load_snapshot(path: Option<&Path>) -> CliResult<DashboardInput> {
    let contents = match path {
        Some(path) if path != Path::new(STDIN_PATH) => {
            std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Io {
                    path: PathBuf::from(STDIN_PATH),
                    source,
                })?;
            buffer
        }
    };

    parse_snapshot(&contents)
}

/// Parse a snapshot document. Every top-level collection is optional.
pub fn parse_snapshot(contents: &str) -> CliResult<DashboardInput> {
    let input: DashboardInput = serde_json::from_str(contents).map_err(CliError::from_json)?;

    debug!(
        "snapshot: {} members, {} log entries, {} tasks, {} closed issues, {} milestones",
        input.members.len(),
        input.log_entries.len(),
        input.tasks.len(),
        input.closed_issues.len(),
        input.milestones.len()
    );

    Ok(input)
}
