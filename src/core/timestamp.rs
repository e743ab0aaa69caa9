//! Timestamp representation and UTC rendering
//!
//! A log call captures one [`Timestamp`]: milliseconds since the Unix epoch. Rendering
//! is always UTC at second resolution (`2016-08-30T08:18:51`) so that lines are
//! reproducible across machines and timezones.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime pattern for the line header
pub const ISO_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Milliseconds since the Unix epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const UNIX_EPOCH: Timestamp = Timestamp(0);

    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// Current wall-clock time
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Convert to a chrono UTC datetime, `None` if out of chrono's range
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0)
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS` in UTC.
    ///
    /// The sub-second part is truncated towards the earlier second, never rounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_logger_core::Timestamp;
    ///
    /// let ts = Timestamp::from_millis(1_234_567_890);
    /// assert_eq!(ts.format_iso_seconds().unwrap(), "1970-01-15T06:56:07");
    /// ```
    pub fn format_iso_seconds(&self) -> Result<String> {
        let datetime = self
            .to_datetime()
            .ok_or_else(|| LoggerError::timestamp_out_of_range(self.0))?;
        Ok(datetime.format(ISO_SECONDS_FORMAT).to_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(f, "{}", datetime.format(ISO_SECONDS_FORMAT)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reference_values() {
        assert_eq!(
            Timestamp::from_millis(1_234_567_890).format_iso_seconds().unwrap(),
            "1970-01-15T06:56:07"
        );
        assert_eq!(
            Timestamp::from_millis(987_654_321_000).format_iso_seconds().unwrap(),
            "2001-04-19T04:25:21"
        );
    }

    #[test]
    fn test_sub_second_is_truncated() {
        let ts = Timestamp::from_millis(999);
        assert_eq!(ts.format_iso_seconds().unwrap(), "1970-01-01T00:00:00");

        let ts = Timestamp::from_millis(-1);
        assert_eq!(ts.format_iso_seconds().unwrap(), "1969-12-31T23:59:59");
    }

    #[test]
    fn test_out_of_range() {
        let err = Timestamp::from_millis(i64::MAX).format_iso_seconds().unwrap_err();
        assert!(matches!(err, LoggerError::TimestampOutOfRange { millis } if millis == i64::MAX));
        assert_eq!(Timestamp::from_millis(i64::MAX).to_string(), format!("{}ms", i64::MAX));
    }

    #[test]
    fn test_from_datetime() {
        let datetime = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        let ts = Timestamp::from(datetime);

        assert_eq!(ts.as_millis(), datetime.timestamp_millis());
        assert_eq!(ts.to_string(), "2025-01-08T10:30:45");
    }

    #[test]
    fn test_now_is_after_epoch() {
        assert!(Timestamp::now() > Timestamp::UNIX_EPOCH);
    }
}
