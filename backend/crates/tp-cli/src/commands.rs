use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Every panel in one document
    Dashboard,

    /// Daily completions over the last 30 days
    Velocity,

    /// Relative activity per member over the last 7 days
    Heatmap,

    /// Per-member task timelines
    Swimlanes,

    /// Remaining open issues per day for each milestone
    Burndown {
        /// Only report this milestone number
        #[arg(long)]
        milestone: Option<u64>,
    },
}
