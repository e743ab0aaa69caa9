//! Main logger implementation
//!
//! A [`Logger`] owns a severity threshold, a [`Clock`] and an ordered list of
//! transports. A call below the threshold returns immediately: the message is not
//! formatted and the clock is not read. An enabled call formats once, reads the clock
//! once, then hands the same `(message, severity, timestamp)` to every transport in
//! registration order.
//!
//! # Threading
//!
//! The logger holds no locks. Mutation (`transport`, `set_level`) takes `&mut self`,
//! and transports with interior mutability such as
//! [`OutputStream`](crate::transports::OutputStream) are `!Sync`. Sharing one logger
//! between threads requires external serialization, e.g. a `Mutex<Logger<_>>` or one
//! logger per thread.

use super::{
    clock::{Clock, SystemClock},
    config::LoggerConfig,
    error::Result,
    severity::Severity,
    transport::Transport,
};
use std::fmt;

pub struct Logger<T, C = SystemClock> {
    threshold: Severity,
    clock: C,
    transports: Vec<T>,
}

impl<T: Transport> Logger<T> {
    /// Create a logger using the system clock.
    ///
    /// # Example
    /// ```
    /// use rust_logger_core::prelude::*;
    ///
    /// let logger: Logger<OutputStream<Vec<u8>>> = Logger::new(Severity::Warn);
    /// assert_eq!(logger.level(), Severity::Warn);
    /// assert!(!logger.is_enabled(Severity::Info));
    /// ```
    #[must_use]
    pub fn new(threshold: Severity) -> Self {
        Self::with_clock(threshold, SystemClock)
    }

    /// Create a logger from a [`LoggerConfig`].
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.level)
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder<T> {
        LoggerBuilder::new()
    }
}

impl<T: Transport, C: Clock> Logger<T, C> {
    #[must_use]
    pub fn with_clock(threshold: Severity, clock: C) -> Self {
        Self {
            threshold,
            clock,
            transports: Vec::new(),
        }
    }

    /// Register a transport. It is appended after every transport registered so far
    /// and receives each subsequent enabled message.
    ///
    /// The same kind may be registered any number of times; each registration is an
    /// independent sink.
    pub fn transport(&mut self, transport: impl Into<T>) {
        self.transports.push(transport.into());
    }

    /// Dispatch a message at `severity`.
    ///
    /// Returns the first transport error unchanged. Transports registered after the
    /// failing one are not called for this message.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        if !severity.is_message_level() || !self.is_enabled(severity) {
            return Ok(());
        }

        let message = fmt::format(args);
        let timestamp = self.clock.now();

        for transport in &self.transports {
            transport.log(&message, severity, timestamp)?;
        }
        Ok(())
    }

    pub fn verbose(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Verbose, args)
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Debug, args)
    }

    pub fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Info, args)
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Warn, args)
    }

    pub fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Error, args)
    }

    pub fn fatal(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.log(Severity::Fatal, args)
    }

    /// Replace the threshold, returning the previous one.
    pub fn set_level(&mut self, threshold: Severity) -> Severity {
        std::mem::replace(&mut self.threshold, threshold)
    }

    #[must_use]
    pub fn level(&self) -> Severity {
        self.threshold
    }

    /// Threshold-inclusive: a message at exactly the threshold is enabled.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    /// Flush every transport in registration order, stopping at the first error.
    pub fn flush(&self) -> Result<()> {
        for transport in &self.transports {
            transport.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn transports(&self) -> &[T] {
        &self.transports
    }

    #[must_use]
    pub fn transport_count(&self) -> usize {
        self.transports.len()
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Consume the logger, returning its transports in registration order.
    #[must_use]
    pub fn into_transports(self) -> Vec<T> {
        self.transports
    }
}

impl<T: Transport> Default for Logger<T> {
    fn default() -> Self {
        Self::new(Severity::default())
    }
}

impl<T, C> fmt::Debug for Logger<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("clock", &std::any::type_name::<C>())
            .field("transports", &self.transports.len())
            .finish()
    }
}

/// Builder for creating a configured Logger
///
/// # Example
///
/// ```
/// use rust_logger_core::prelude::*;
/// use rust_logger_core::warn;
///
/// let logger = Logger::<OutputStream<Vec<u8>>>::builder()
///     .level(Severity::Warn)
///     .clock(FixedClock::from_millis(0))
///     .transport(OutputStream::new(Vec::new()))
///     .build();
///
/// warn!(logger, "disk at {}%", 91).unwrap();
/// let out = logger.into_transports().remove(0).into_inner();
/// assert_eq!(out, b"1970-01-01T00:00:00 W: disk at 91%\n");
/// ```
pub struct LoggerBuilder<T, C = SystemClock> {
    level: Severity,
    clock: C,
    transports: Vec<T>,
}

impl<T: Transport> LoggerBuilder<T> {
    pub fn new() -> Self {
        Self {
            level: Severity::default(),
            clock: SystemClock,
            transports: Vec::new(),
        }
    }
}

impl<T: Transport, C: Clock> LoggerBuilder<T, C> {
    /// Set the initial threshold
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Apply settings from a [`LoggerConfig`]
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: &LoggerConfig) -> Self {
        self.level = config.level;
        self
    }

    /// Add a transport; order of calls is the fan-out order
    #[must_use = "builder methods return a new value"]
    pub fn transport(mut self, transport: impl Into<T>) -> Self {
        self.transports.push(transport.into());
        self
    }

    /// Replace the time source
    #[must_use = "builder methods return a new value"]
    pub fn clock<C2: Clock>(self, clock: C2) -> LoggerBuilder<T, C2> {
        LoggerBuilder {
            level: self.level,
            clock,
            transports: self.transports,
        }
    }

    /// Build the Logger
    pub fn build(self) -> Logger<T, C> {
        Logger {
            threshold: self.level,
            clock: self.clock,
            transports: self.transports,
        }
    }
}

impl<T: Transport> Default for LoggerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
