/// Access log parsing
///
/// Turns raw access log lines into [`LogRecord`] values.
///
/// # Architecture
///
/// - `traits.rs`: The `LogParser` seam
/// - `model.rs`: Record, field and error types
/// - `formats/`: Line format implementations
/// - `batch.rs`: Whole-batch parsing with abort on the first bad line

pub mod traits;
pub mod model;
pub mod formats;
pub mod batch;

// Re-export commonly used types
pub use traits::LogParser;
pub use model::{Field, LogRecord, ParseError, StatusClass};
pub use formats::AccessLogParser;
pub use batch::parse_lines;
