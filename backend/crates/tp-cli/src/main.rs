//! tpulse - team activity dashboards
//!
//! Reads a JSON snapshot of members, tasks, issues, session logs and
//! milestones, and prints display-ready dashboard data as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Everything, pinned to a fixed day
//! tpulse dashboard --input snapshot.json --now 2026-02-18 --pretty
//!
//! # One milestone's burndown, snapshot on stdin
//! cat snapshot.json | tpulse burndown --milestone 3
//!
//! # Velocity from session-log tasks only
//! tpulse velocity -i snapshot.json --velocity-source session_log
//! ```

use std::process::ExitCode;
use std::str::FromStr;

use chrono::Local;
use clap::Parser;
use tp_analytics::DashboardOptions;
use tp_cli::{Cli, CliResult, load_snapshot, logger, render, resolve_now, run_command};
use tp_config::Config;
use tp_core::VelocitySource;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<String> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    // Flag > config file > default
    let source = cli
        .velocity_source
        .as_deref()
        .unwrap_or(config.dashboard.velocity_source.as_str());
    let options = DashboardOptions {
        velocity_source: VelocitySource::from_str(source)?,
    };

    let now = resolve_now(cli.now.as_deref(), &Local)?;
    let input = load_snapshot(cli.input.as_deref())?;
    let report = run_command(&cli.command, &input, &options, &now)?;

    render(&report, cli.pretty || config.dashboard.pretty)
}
