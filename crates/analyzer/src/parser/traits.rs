pub use super::model::{Field, LogRecord, ParseError, StatusClass};

pub trait LogParser: Send + Sync {
    /// parse a raw log line into a record
    fn parse(&self, raw: &str) -> Result<LogRecord, ParseError>;
}
