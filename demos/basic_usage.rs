//! Basic logger usage example
//!
//! Demonstrates synchronous logging to stdout and different thresholds.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_core::prelude::*;
use rust_logger_core::{debug, error, fatal, info, verbose, warn};

fn main() -> Result<()> {
    println!("=== Rust Logger Core - Basic Usage Example ===\n");

    let mut logger: Logger<OutputStream<std::io::Stdout>> = Logger::new(Severity::Verbose);
    logger.transport(OutputStream::stdout());

    println!("1. Logging at different levels:");
    verbose!(logger, "This is a verbose message")?;
    debug!(logger, "This is a debug message")?;
    info!(logger, "This is an info message")?;
    warn!(logger, "This is a warning message")?;
    error!(logger, "This is an error message")?;
    fatal!(logger, "This is a fatal message")?;

    println!("\n2. Logging with different thresholds:");

    let previous = logger.set_level(Severity::Info);
    println!("   Threshold changed from {} to INFO - verbose and debug won't show:", previous);
    verbose!(logger, "Verbose message (hidden)")?;
    debug!(logger, "Debug message (hidden)")?;
    info!(logger, "Info message (visible)")?;
    warn!(logger, "Retry attempt {} of {}", 3, 5)?;

    logger.set_level(Severity::None);
    println!("   Threshold set to NONE - nothing shows:");
    fatal!(logger, "Fatal message (hidden)")?;

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
