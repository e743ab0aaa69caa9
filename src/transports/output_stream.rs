//! Stream transport implementation
//!
//! Writes one line per record to any [`io::Write`]:
//!
//! ```text
//! 2016-08-30T08:18:51 I: message
//! ```
//!
//! The header is UTC at second resolution. The message is written verbatim, so
//! embedded newlines pass through unchanged.

use crate::core::{LoggerError, Result, Severity, Timestamp, Transport};
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};

/// Render a record in the stream line format, trailing newline included.
///
/// # Examples
///
/// ```
/// use rust_logger_core::{transports::format_line, Severity, Timestamp};
///
/// let line = format_line("Test message", Severity::Info, Timestamp::from_millis(1_234_567_890)).unwrap();
/// assert_eq!(line, "1970-01-15T06:56:07 I: Test message\n");
/// ```
pub fn format_line(message: &str, severity: Severity, timestamp: Timestamp) -> Result<String> {
    let header = timestamp.format_iso_seconds()?;
    Ok(format!("{} {}: {}\n", header, severity.letter(), message))
}

/// Transport writing formatted lines to a byte destination.
///
/// `W` can be an owned writer (`File`, `Vec<u8>`) or a borrowed one (`&mut Vec<u8>`);
/// with a borrow the destination necessarily outlives the logger. Nothing is buffered
/// here beyond what `W` itself does.
pub struct OutputStream<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> OutputStream<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Recover the destination.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl OutputStream<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl OutputStream<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Transport for OutputStream<W> {
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        let line = format_line(message, severity, timestamp)?;
        let mut out = self
            .out
            .try_borrow_mut()
            .map_err(|_| LoggerError::TransportBusy)?;
        out.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut out = self
            .out
            .try_borrow_mut()
            .map_err(|_| LoggerError::TransportBusy)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> fmt::Debug for OutputStream<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputStream")
            .field("writer", &std::any::type_name::<W>())
            .finish()
    }
}
