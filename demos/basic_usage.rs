//! Basic handler usage example
//!
//! Demonstrates the pretty handler on stdout, level filtering and attributes.
//!
//! Run with: cargo run --example basic_usage

use rust_log_handlers::prelude::*;
use rust_log_handlers::{info, warn};
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Rust Log Handlers - Basic Usage Example ===\n");

    let handler = PrettyHandler::stdout(Some(
        PrettyOptions::new().with_level(LogLevel::Trace).with_source(true),
    ));
    let logger = Logger::new(handler);

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    // Rendering happens on detached units.
    thread::sleep(Duration::from_millis(100));

    println!("\n2. Inherited attributes and groups:");
    let request = logger
        .with(&[Attr::new("service", "checkout")])
        .with_group("request");

    info!(request, { id = 42, path = "/cart" }, "Request received");
    warn!(request, { id = 42, body = vec![0u8; 512] }, "Large body");

    thread::sleep(Duration::from_millis(100));
    println!("\n=== Example completed successfully! ===");
}
