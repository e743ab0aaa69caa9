//! Severity level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Importance of a log message, also used as a logger threshold.
///
/// Levels are totally ordered: `Verbose < Debug < Info < Warn < Error < Fatal < None`.
/// [`Severity::None`] is a threshold-only sentinel that suppresses everything; it is
/// never the severity of an emitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Verbose = 0x00,
    Debug = 0x01,
    #[default]
    Info = 0x02,
    Warn = 0x03,
    Error = 0x04,
    Fatal = 0x05,
    None = 0x7F,
}

impl Severity {
    /// Every severity value, in ascending order.
    pub const ALL: [Severity; 7] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::None,
    ];

    /// The six levels a message can carry.
    pub const LEVELS: [Severity; 6] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Single-letter code used in line headers, `None` for the sentinel.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Severity::Verbose => Some("V"),
            Severity::Debug => Some("D"),
            Severity::Info => Some("I"),
            Severity::Warn => Some("W"),
            Severity::Error => Some("E"),
            Severity::Fatal => Some("F"),
            Severity::None => None,
        }
    }

    /// Like [`Severity::code`], with `"-"` for the sentinel.
    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self.code() {
            Some(code) => code,
            None => "-",
        }
    }

    pub const fn to_str(&self) -> &'static str {
        match self {
            Severity::Verbose => "VERBOSE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::None => "NONE",
        }
    }

    /// Whether this value can label an emitted message.
    #[must_use]
    pub const fn is_message_level(&self) -> bool {
        !matches!(self, Severity::None)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Verbose => BrightBlack,
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
            Severity::Fatal | Severity::None => BrightRed,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "VERBOSE" | "V" => Ok(Severity::Verbose),
            "DEBUG" | "D" => Ok(Severity::Debug),
            "INFO" | "I" => Ok(Severity::Info),
            "WARN" | "WARNING" | "W" => Ok(Severity::Warn),
            "ERROR" | "E" => Ok(Severity::Error),
            "FATAL" | "F" => Ok(Severity::Fatal),
            "NONE" | "OFF" => Ok(Severity::None),
            _ => Err(LoggerError::invalid_severity(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
        assert!(Severity::Fatal < Severity::None);
    }

    #[test]
    fn test_letter_codes() {
        let letters: Vec<_> = Severity::LEVELS.iter().map(|s| s.letter()).collect();
        assert_eq!(letters, ["V", "D", "I", "W", "E", "F"]);
        assert_eq!(Severity::None.code(), None);
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("F".parse::<Severity>().unwrap(), Severity::Fatal);
        assert_eq!(" off ".parse::<Severity>().unwrap(), Severity::None);

        let err = "loud".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidSeverity(_)));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let parsed: Severity = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(parsed, Severity::None);
    }
}
