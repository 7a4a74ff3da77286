//! Async logging example
//!
//! Demonstrates fire-and-forget dispatch from several threads.
//!
//! Run with: cargo run --example async_logging

use rust_log_handlers::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Rust Log Handlers - Async Logging Example ===\n");

    let handler = AsyncHandler::new(PrettyHandler::stdout(None)).with_error_callback(Arc::new(
        |err: &HandlerError| eprintln!("[LOGGER ERROR] dropped record: {}", err),
    ));
    let metrics_view = handler.clone();
    let logger = Logger::new(handler);

    println!("1. Multi-threaded logging:");

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = logger.with(&[Attr::new("thread", thread_id)]);
        handles.push(thread::spawn(move || {
            for i in 0..5 {
                logger.info(format!("Message {}", i));
                thread::sleep(Duration::from_millis(10));
            }
        }));
    }

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    // Give detached units time to finish
    thread::sleep(Duration::from_millis(200));

    let metrics = metrics_view.metrics();
    println!(
        "\n   dispatched={} completed={} failed={}",
        metrics.dispatched(),
        metrics.completed(),
        metrics.failed()
    );
    println!("\n=== Example completed successfully! ===");
}
