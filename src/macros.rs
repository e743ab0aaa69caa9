//! Logging macros for ergonomic log message formatting.
//!
//! The template and its arguments go through `format_args!`, so a mismatch between
//! placeholders and arguments is a compile error. Nothing is formatted unless the
//! logger's threshold lets the message through.
//!
//! Every macro evaluates to the logger's `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use rust_logger_core::prelude::*;
//! use rust_logger_core::info;
//!
//! let mut logger: Logger<OutputStream<Vec<u8>>, FixedClock> =
//!     Logger::with_clock(Severity::Info, FixedClock::from_millis(1_234_567_890));
//! logger.transport(OutputStream::new(Vec::new()));
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! let out = logger.into_transports().remove(0).into_inner();
//! assert_eq!(out, b"1970-01-15T06:56:07 I: Server listening on port 8080\n");
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use rust_logger_core::prelude::*;
/// # let logger: Logger<OutputStream<Vec<u8>>> = Logger::new(Severity::Info);
/// use rust_logger_core::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Verbose, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_core::prelude::*;
/// # let logger: Logger<OutputStream<Vec<u8>>> = Logger::new(Severity::Debug);
/// use rust_logger_core::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_core::prelude::*;
/// # let logger: Logger<OutputStream<Vec<u8>>> = Logger::new(Severity::Info);
/// use rust_logger_core::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
