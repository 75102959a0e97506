//! Batch — parse every line of one input, stopping at the first bad line.

use tracing::debug;

use crate::error::AnalyzerError;
use crate::parser::traits::{LogParser, LogRecord, ParseError};

/// Parse a whole batch of lines.
///
/// The first line that fails aborts the batch and no records are returned.
/// The failing line number is only logged at debug level.
pub fn parse_lines<P, S>(parser: &P, lines: &[S]) -> Result<Vec<LogRecord>, AnalyzerError>
where
    P: LogParser + ?Sized,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        match parser.parse(line.as_ref()) {
            Ok(record) => records.push(record),
            Err(e) => {
                if let ParseError::MissingToken(field) = &e {
                    debug!(line = index + 1, field = field.as_str(), "malformed log line");
                }
                return Err(e.into());
            }
        }
    }

    debug!(records = records.len(), "parsed batch");
    Ok(records)
}
