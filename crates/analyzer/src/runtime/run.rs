//! Run — the load → parse → aggregate → report pipeline for one input file.

use std::io;
use std::path::Path;

use tracing::info;

use crate::conf::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::input::{check_file, read_lines};
use crate::parser::{parse_lines, AccessLogParser, LogRecord};
use crate::report::Reporter;
use crate::stats::{aggregate, AggregateStatistics};

/// Read and parse every line of `log_file` with the parser `config` selects.
pub fn load_records(log_file: Option<&Path>, config: &AnalyzerConfig) -> Result<Vec<LogRecord>, AnalyzerError> {
    let path = check_file(log_file)?;
    let lines = read_lines(&path)?;
    info!("Read {} lines from {}", lines.len(), path.display());

    let parser = AccessLogParser::with_path_normalization(config.normalize_path)?;
    parse_lines(&parser, &lines)
}

/// Parse and aggregate `log_file` without touching any result sink.
pub fn analyze(log_file: Option<&Path>, config: &AnalyzerConfig) -> Result<AggregateStatistics, AnalyzerError> {
    let records = load_records(log_file, config)?;
    Ok(aggregate(&records))
}

/// Analyze `log_file` and report the statistics.
///
/// Sinks are only written after the whole batch parsed and aggregated.
pub fn run(log_file: Option<&Path>, config: &AnalyzerConfig) -> Result<AggregateStatistics, AnalyzerError> {
    let stats = analyze(log_file, config)?;

    let mut reporter = Reporter::new(config.result_path.clone(), config.echo_stdout.then(io::stdout));
    reporter.report(&stats)?;

    Ok(stats)
}
