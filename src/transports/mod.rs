//! Transport implementations

#[cfg(feature = "console")]
pub mod console;
pub mod function;
pub mod output_stream;

#[cfg(feature = "console")]
pub use console::Console;
pub use function::{from_fn, FnTransport};
pub use output_stream::{format_line, OutputStream};

pub use crate::core::Transport;
