/// Individual line format parsers

pub mod access_log;

// Re-export parser implementations
pub use access_log::{AccessLogParser, Patterns};
