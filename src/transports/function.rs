//! Closure-backed transport

use crate::core::{Result, Severity, Timestamp, Transport};
use std::fmt;

/// Adapts a closure into a [`Transport`].
///
/// # Examples
///
/// ```
/// use rust_logger_core::prelude::*;
/// use rust_logger_core::error;
/// use std::cell::Cell;
///
/// let errors = Cell::new(0);
/// let mut logger: Logger<FnTransport<_>> = Logger::new(Severity::Info);
/// logger.transport(FnTransport::new(|_msg: &str, severity: Severity, _ts: Timestamp| {
///     if severity >= Severity::Error {
///         errors.set(errors.get() + 1);
///     }
///     Ok(())
/// }));
///
/// error!(logger, "failed to open {}", "config.toml").unwrap();
/// assert_eq!(errors.get(), 1);
/// ```
pub struct FnTransport<F> {
    f: F,
}

impl<F> FnTransport<F>
where
    F: Fn(&str, Severity, Timestamp) -> Result<()>,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

/// Shorthand for [`FnTransport::new`].
pub fn from_fn<F>(f: F) -> FnTransport<F>
where
    F: Fn(&str, Severity, Timestamp) -> Result<()>,
{
    FnTransport::new(f)
}

impl<F> Transport for FnTransport<F>
where
    F: Fn(&str, Severity, Timestamp) -> Result<()>,
{
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        (self.f)(message, severity, timestamp)
    }
}

impl<F> fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTransport").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use std::cell::RefCell;

    #[test]
    fn test_closure_receives_record() {
        let seen = RefCell::new(Vec::new());
        let transport = from_fn(|message: &str, severity: Severity, timestamp: Timestamp| {
            seen.borrow_mut().push(format!(
                "{} {} {}",
                timestamp.as_millis() % 10_000,
                severity as u8,
                message
            ));
            Ok(())
        });

        transport
            .log("hello verbose", Severity::Verbose, Timestamp::from_millis(1_234_567_890))
            .unwrap();
        assert_eq!(seen.borrow().as_slice(), ["7890 0 hello verbose"]);
    }

    #[test]
    fn test_closure_error_is_returned() {
        let transport = FnTransport::new(|_: &str, _: Severity, _: Timestamp| {
            Err(LoggerError::transport("rejected"))
        });

        let err = transport
            .log("x", Severity::Info, Timestamp::UNIX_EPOCH)
            .unwrap_err();
        assert_eq!(err.to_string(), "Transport error: rejected");
        assert!(transport.flush().is_ok());
    }
}
