//! CLI argument parsing for perfstat

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "perfstat")]
#[command(version)]
#[command(about = "Summarize per-event timings from a performance log", long_about = None)]
pub struct Cli {
    /// Path to the log file to analyze
    pub log_file: Option<PathBuf>,

    /// Enable verbose diagnostic output on stderr
    #[arg(long)]
    pub debug: bool,
}
