use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aquaplan", version, about = "Irrigation priority and water allocation planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a field snapshot and allocate the water budget
    Allocate {
        /// Field snapshot file (.json or .csv)
        snapshot: PathBuf,

        /// Water budget for the cycle, in cubic meters
        #[arg(short, long)]
        available: f64,

        /// Write the cycle report as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the configuration
    Check,
}
