//! # Rust Logger Core
//!
//! A minimal, embeddable logging core: messages are gated by severity, formatted
//! lazily, timestamped once and fanned out, in registration order, to a statically
//! typed set of transports.
//!
//! ## Features
//!
//! - **Zero cost when disabled**: a call below the threshold neither formats nor reads the clock
//! - **Static dispatch**: a logger is generic over its transport type; mix sinks with [`transport_set!`]
//! - **Deterministic output**: the stream transport writes UTC, second-resolution headers
//! - **Synchronous**: no background threads, no locks; errors come straight back to the caller
//!
//! ## Example
//!
//! ```
//! use rust_logger_core::prelude::*;
//! use rust_logger_core::{debug, info};
//!
//! let mut out = Vec::new();
//! {
//!     let mut logger: Logger<OutputStream<&mut Vec<u8>>> = Logger::new(Severity::Info);
//!     logger.transport(OutputStream::new(&mut out));
//!
//!     debug!(logger, "not shown")?;
//!     info!(logger, "Hello {}", "world")?;
//! }
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with(" I: Hello world\n"));
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod transports;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::transports::Console;
    pub use crate::transports::{FnTransport, OutputStream};
    pub use crate::core::{
        Clock, FixedClock, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, Severity,
        SystemClock, Timestamp, Transport,
    };
}

#[cfg(feature = "console")]
pub use transports::Console;
pub use transports::{FnTransport, OutputStream};
pub use self::core::{
    Clock, FixedClock, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, Severity,
    SystemClock, Timestamp, Transport,
};
