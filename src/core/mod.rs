//! Core logger types and traits

pub mod clock;
pub mod config;
pub mod error;
pub mod logger;
pub mod severity;
pub mod timestamp;
pub mod transport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerBuilder};
pub use severity::Severity;
pub use timestamp::Timestamp;
pub use transport::Transport;
