use regex::Regex;

use crate::parser::traits::{Field, LogParser, LogRecord, ParseError};

/// Token patterns for access log fields.
///
/// Each pattern is applied to the whole line independently, so field order
/// within the line does not matter. The numeric tokens only accept ASCII
/// digits; `\d` elsewhere is Unicode-aware.
pub struct Patterns;

impl Patterns {
    /// Four digit groups. The separator is any character, not only a dot.
    pub const CLIENT_ADDRESS: &'static str = r"\d+.\d+.\d+.\d+";

    /// `10/Oct/2000:13:55:36 -0700`
    pub const TIMESTAMP: &'static str = r"\d+/\w{3}/\d+:\d+:\d+:\d+ [+-]\d+";

    /// Uppercase verb right after the opening quote of the request line.
    pub const METHOD: &'static str = r#""([A-Z]{3,10}) "#;

    /// Path including the space that terminates it.
    pub const PATH: &'static str = r"/[\w./?=&-]* ";

    /// Three digits after the closing quote of the request line.
    pub const STATUS: &'static str = r#"" ((?-u:\d){3}) "#;

    /// Trailing run of digits.
    pub const RESPONSE_SIZE: &'static str = r"(?-u:\d)+$";
}

/// Parser for HTTP access logs (Common Log Format).
///
/// Extracts client address, timestamp, method, path, status code and
/// response size. A line missing any of them is rejected as a whole.
///
/// Example: `127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326`
#[derive(Debug, Clone)]
pub struct AccessLogParser {
    client_address: Regex,
    timestamp: Regex,
    method: Regex,
    path: Regex,
    status: Regex,
    response_size: Regex,
    normalize_path: bool,
}

impl AccessLogParser {
    pub fn new() -> Result<Self, ParseError> {
        Self::with_path_normalization(false)
    }

    /// When `normalize_path` is set, the delimiter captured after the path is trimmed.
    pub fn with_path_normalization(normalize_path: bool) -> Result<Self, ParseError> {
        Ok(Self {
            client_address: compile(Patterns::CLIENT_ADDRESS)?,
            timestamp: compile(Patterns::TIMESTAMP)?,
            method: compile(Patterns::METHOD)?,
            path: compile(Patterns::PATH)?,
            status: compile(Patterns::STATUS)?,
            response_size: compile(Patterns::RESPONSE_SIZE)?,
            normalize_path,
        })
    }
}

impl LogParser for AccessLogParser {
    fn parse(&self, raw: &str) -> Result<LogRecord, ParseError> {
        // `$` must anchor on the last visible character, not on a line terminator
        let text = raw.trim_end_matches(['\r', '\n']);

        let client_address = find(&self.client_address, text, Field::ClientAddress)?;
        let timestamp = find(&self.timestamp, text, Field::Timestamp)?;
        let method = capture(&self.method, text, Field::Method)?;
        let path = find(&self.path, text, Field::Path)?;
        let status = capture(&self.status, text, Field::Status)?
            .parse::<u16>()
            .map_err(|_| ParseError::MissingToken(Field::Status))?;
        let response_size = find(&self.response_size, text, Field::ResponseSize)?
            .parse::<u64>()
            .map_err(|_| ParseError::MissingToken(Field::ResponseSize))?;

        let path = if self.normalize_path { path.trim_end() } else { path };

        Ok(LogRecord {
            client_address: client_address.to_string(),
            timestamp: timestamp.to_string(),
            method: method.to_string(),
            path: path.to_string(),
            status,
            response_size,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, ParseError> {
    Regex::new(pattern).map_err(|e| ParseError::InvalidPattern(e.to_string()))
}

/// Whole text of the first match.
fn find<'a>(re: &Regex, text: &'a str, field: Field) -> Result<&'a str, ParseError> {
    re.find(text)
        .map(|m| m.as_str())
        .ok_or(ParseError::MissingToken(field))
}

/// First capture group of the first match.
fn capture<'a>(re: &Regex, text: &'a str, field: Field) -> Result<&'a str, ParseError> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(ParseError::MissingToken(field))
}
