//! File logging example
//!
//! Demonstrates fan-out to the console and to a file with its own level.
//!
//! Run with: cargo run --example file_logging

use rust_log_handlers::prelude::*;
use std::fs::File;
use std::thread;
use std::time::Duration;

fn main() -> std::io::Result<()> {
    println!("=== Rust Log Handlers - File Logging Example ===\n");

    let console = PrettyHandler::stdout(None);
    let file = PrettyHandler::new(
        File::create("application.log")?,
        Some(PrettyOptions::new().with_level(LogLevel::Warn)),
    );

    let logger = Logger::new(ParallelHandler::new(vec![console.into(), file.into()]));

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    for i in 1..=5 {
        logger.log_attrs(LogLevel::Info, "Processing item", vec![Attr::new("item", i)]);
        if i == 3 {
            logger.log_attrs(
                LogLevel::Warn,
                "Item took longer than expected",
                vec![Attr::new("item", i), Attr::new("elapsed", Duration::from_millis(750))],
            );
        }
    }

    // Rendering happens on detached units.
    thread::sleep(Duration::from_millis(200));

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for warnings and errors");

    Ok(())
}
