//! Error — the crate-wide error type surfaced to the binary.

use thiserror::Error;

use crate::parser::{Field, ParseError};

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The message stays generic; `field` is kept for callers that need it.
    #[error("An unexpected error occurred: malformed log line")]
    MalformedLine { field: Field },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(ParseError),
}

impl From<ParseError> for AnalyzerError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::MissingToken(field) => AnalyzerError::MalformedLine { field },
            other => AnalyzerError::Parse(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_becomes_malformed_line() {
        let err: AnalyzerError = ParseError::MissingToken(Field::Status).into();
        assert!(matches!(err, AnalyzerError::MalformedLine { field: Field::Status }));
    }

    #[test]
    fn test_malformed_line_message_is_generic() {
        let err = AnalyzerError::MalformedLine { field: Field::Path };
        let message = err.to_string();
        assert!(message.contains("unexpected error"));
        assert!(!message.contains("path"));
    }

    #[test]
    fn test_invalid_pattern_stays_parse_error() {
        let err: AnalyzerError = ParseError::InvalidPattern("unclosed group".into()).into();
        assert!(matches!(err, AnalyzerError::Parse(_)));
        assert_eq!(err.to_string(), "Invalid pattern: unclosed group");
    }
}
