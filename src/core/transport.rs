//! Transport trait for log output destinations
//!
//! A transport receives every emitted record as `(message, severity, timestamp)` and
//! performs some side effect with it. Any type can be a transport, including types
//! local to a function.
//!
//! A [`Logger`](super::Logger) is generic over one transport type. To mix unrelated
//! sinks in a single logger without virtual dispatch, declare a closed set of kinds
//! with [`transport_set!`](crate::transport_set); `Box<dyn Transport>` remains
//! available when an open set is preferred.

use super::{error::Result, severity::Severity, timestamp::Timestamp};
use std::rc::Rc;
use std::sync::Arc;

pub trait Transport {
    /// Consume one emitted record.
    ///
    /// Every transport registered on a logger sees the same three values for a given
    /// call. An `Err` aborts the remaining fan-out and is returned to the caller.
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        (**self).log(message, severity, timestamp)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        (**self).log(message, severity, timestamp)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: Transport + ?Sized> Transport for Rc<T> {
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        (**self).log(message, severity, timestamp)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn log(&self, message: &str, severity: Severity, timestamp: Timestamp) -> Result<()> {
        (**self).log(message, severity, timestamp)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// Declare a closed set of transport kinds as an enum that is itself a [`Transport`].
///
/// Each variant wraps exactly one transport type. The generated enum forwards `log`
/// and `flush` with a single `match`, and gets a `From` impl per variant so that
/// [`Logger::transport`](crate::Logger::transport) accepts the inner values directly.
/// The enum may carry one lifetime parameter for borrowed destinations.
///
/// # Examples
///
/// ```
/// use rust_logger_core::prelude::*;
/// use rust_logger_core::{info, transport_set};
///
/// transport_set! {
///     enum Sinks<'a> {
///         Buffer(OutputStream<&'a mut Vec<u8>>),
///         Discard(FnTransport<fn(&str, Severity, Timestamp) -> Result<()>>),
///     }
/// }
///
/// fn discard(_: &str, _: Severity, _: Timestamp) -> Result<()> {
///     Ok(())
/// }
///
/// let mut buffer = Vec::new();
/// {
///     let mut logger: Logger<Sinks<'_>> = Logger::new(Severity::Info);
///     logger.transport(OutputStream::new(&mut buffer));
///     logger.transport(FnTransport::new(discard as fn(&str, Severity, Timestamp) -> Result<()>));
///     info!(logger, "ready").unwrap();
/// }
/// assert!(String::from_utf8(buffer).unwrap().ends_with(" I: ready\n"));
/// ```
#[macro_export]
macro_rules! transport_set {
    (@from [$($lt:tt)*] $name:ident;) => {};

    (@from [$($lt:tt)*] $name:ident; $variant:ident($ty:ty) $(, $($rest:tt)*)?) => {
        impl<$($lt)*> ::core::convert::From<$ty> for $name<$($lt)*> {
            fn from(transport: $ty) -> Self {
                $name::$variant(transport)
            }
        }

        $crate::transport_set!(@from [$($lt)*] $name; $($($rest)*)?);
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(<$lt:lifetime>)? {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name<$($lt)?> {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )+
        }

        impl<$($lt)?> $crate::Transport for $name<$($lt)?> {
            fn log(
                &self,
                message: &str,
                severity: $crate::Severity,
                timestamp: $crate::Timestamp,
            ) -> $crate::Result<()> {
                match self {
                    $(
                        $name::$variant(transport) => {
                            $crate::Transport::log(transport, message, severity, timestamp)
                        }
                    )+
                }
            }

            fn flush(&self) -> $crate::Result<()> {
                match self {
                    $(
                        $name::$variant(transport) => $crate::Transport::flush(transport),
                    )+
                }
            }
        }

        $crate::transport_set!(@from [$($lt)?] $name; $($variant($ty)),+);
    };
}
