use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "soilcheck",
    version,
    about = "Soil moisture analysis with drought and flood advice"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the input and output files (default: parent of the working directory)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Input file name inside the data directory
    #[arg(long)]
    pub input: Option<String>,

    /// Output CSV file name inside the data directory
    #[arg(long)]
    pub output: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Analyze the input file and export it as CSV (default)
    Run,
    /// Validate config and report on the input and output locations
    Check,
    /// Show per-day conditions with a 7-observation rolling average
    Trend,
}
