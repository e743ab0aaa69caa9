//! Multiple transports example
//!
//! Demonstrates a closed set of transport kinds: the console, a log file and an
//! in-process error counter, all fed by one logger.
//!
//! Run with: cargo run --example multiple_transports

use rust_logger_core::prelude::*;
use rust_logger_core::{debug, error, info, transport_set, warn};
use std::cell::Cell;
use std::fs::File;

transport_set! {
    enum Sinks<'a> {
        Console(Console),
        File(OutputStream<File>),
        Counter(FnTransport<Box<dyn Fn(&str, Severity, Timestamp) -> Result<()> + 'a>>),
    }
}

fn main() -> Result<()> {
    println!("=== Rust Logger Core - Multiple Transports Example ===\n");

    let path = std::env::temp_dir().join("rust_logger_core_demo.log");
    let errors = Cell::new(0);

    {
        let mut logger = Logger::<Sinks<'_>>::builder()
            .level(Severity::Debug)
            .transport(Console::with_colors(true))
            .transport(OutputStream::new(File::create(&path)?))
            .build();

        let counter: Box<dyn Fn(&str, Severity, Timestamp) -> Result<()> + '_> =
            Box::new(|_message, severity, _timestamp| {
                if severity >= Severity::Error {
                    errors.set(errors.get() + 1);
                }
                Ok(())
            });
        logger.transport(FnTransport::new(counter));

        debug!(logger, "Loaded {} settings", 12)?;
        info!(logger, "Listening on port {}", 8080)?;
        warn!(logger, "Cache {}% full", 91)?;
        error!(logger, "Upstream {} unreachable", "db-1")?;

        logger.flush()?;
    }

    println!("\nErrors counted: {}", errors.get());
    println!("File transport wrote {}:", path.display());
    print!("{}", std::fs::read_to_string(&path)?);

    Ok(())
}
