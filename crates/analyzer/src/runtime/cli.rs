//! Cli — command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Summarize an HTTP access log: average response size, busiest clients and error codes.
#[derive(Parser, Debug)]
#[command(name = "analyzer", version, about)]
pub struct Cli {
    /// Access log file to analyze
    #[arg(value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
