//! Declarative logger settings
//!
//! Applications usually keep the threshold in their own configuration files; this
//! struct deserializes that fragment so it can be applied with
//! [`Logger::from_config`](super::Logger::from_config) or
//! [`LoggerBuilder::config`](super::LoggerBuilder::config).

use super::severity::Severity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: Severity,
}

impl LoggerConfig {
    #[must_use]
    pub fn new(level: Severity) -> Self {
        Self { level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_level_defaults_to_info() {
        let config: LoggerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.level, Severity::Info);
    }

    #[test]
    fn test_roundtrip() {
        let config = LoggerConfig::new(Severity::Verbose);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"level":"verbose"}"#);
        assert_eq!(serde_json::from_str::<LoggerConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert!(serde_json::from_str::<LoggerConfig>(r#"{"level":"loud"}"#).is_err());
    }
}
