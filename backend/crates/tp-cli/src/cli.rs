use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tpulse")]
#[command(about = "Team activity dashboards from a JSON snapshot")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Snapshot JSON file ("-" or omitted reads stdin)
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    /// Pin the clock to an RFC 3339 timestamp or a YYYY-MM-DD day
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Velocity task source: session_log or all_sources (overrides config)
    #[arg(long, global = true)]
    pub velocity_source: Option<String>,
}
