use thiserror::Error;

/// A field extracted from an access log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ClientAddress,
    Timestamp,
    Method,
    Path,
    Status,
    ResponseSize,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::ClientAddress => "client_address",
            Field::Timestamp => "timestamp",
            Field::Method => "method",
            Field::Path => "path",
            Field::Status => "status",
            Field::ResponseSize => "response_size",
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Missing token: {}", .0.as_str())]
    MissingToken(Field),
}

/// One parsed access log line.
///
/// Every field is present or the line failed to parse; there is no partial record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Dotted address token, not validated as an IPv4 address
    pub client_address: String,

    /// Raw `DD/Mon/YYYY:HH:MM:SS +ZZZZ` token, kept as text
    pub timestamp: String,

    /// GET, POST, etc.
    pub method: String,

    /// Request path. Keeps its trailing delimiter unless the parser normalizes paths.
    pub path: String,

    pub status: u16,

    pub response_size: u64,
}

impl LogRecord {
    pub fn status_class(&self) -> StatusClass {
        StatusClass::of(self.status)
    }
}

/// Error bracket a status code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 400..500
    ClientError,
    /// 500..600
    ServerError,
    Other,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::Other,
        }
    }
}
