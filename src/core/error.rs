//! Error types for the logger core

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Destination write or flush failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timestamp cannot be represented as a calendar date
    #[error("Timestamp out of range: {millis} ms since epoch")]
    TimestampOutOfRange { millis: i64 },

    /// Unknown severity name
    #[error("Invalid severity: '{0}'")]
    InvalidSeverity(String),

    /// A transport's destination was borrowed while already in use
    #[error("Transport destination is already in use")]
    TransportBusy,

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),
}

impl LoggerError {
    /// Create a timestamp range error
    pub fn timestamp_out_of_range(millis: i64) -> Self {
        LoggerError::TimestampOutOfRange { millis }
    }

    /// Create an invalid severity error
    pub fn invalid_severity(name: impl Into<String>) -> Self {
        LoggerError::InvalidSeverity(name.into())
    }

    /// Create a custom transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        LoggerError::Transport(msg.into())
    }
}
