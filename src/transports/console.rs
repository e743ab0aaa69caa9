//! Console transport implementation

use crate::core::{Result, Severity, Timestamp, Transport};
use colored::Colorize;
use std::io::{self, Write};

/// Writes stream-format lines to the terminal.
///
/// Error and Fatal go to stderr, everything else to stdout. With colors enabled the
/// severity letter is colored; the rest of the line is unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    use_colors: bool,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    fn format_text(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<String> {
        let header = timestamp.format_iso_seconds()?;
        let letter = if self.use_colors {
            severity.letter().color(severity.color_code()).to_string()
        } else {
            severity.letter().to_string()
        };
        Ok(format!("{} {}: {}\n", header, letter, message))
    }
}

impl Transport for Console {
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        let line = self.format_text(message, severity, timestamp)?;

        match severity {
            Severity::Error | Severity::Fatal => io::stderr().lock().write_all(line.as_bytes())?,
            _ => io::stdout().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
