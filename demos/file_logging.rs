//! File logging example
//!
//! Demonstrates persistent mode: lines are queued to a writer thread that owns
//! the log file.
//!
//! Run with: cargo run --example file_logging

use mlog::prelude::*;

fn main() -> Result<()> {
    println!("=== mlog - File Logging Example ===\n");

    let mut logger = Logger::builder()
        .persistent(FileAppender::new("application.log")?)
        .level(LogLevel::Info)
        .trace_key("userID")
        .build()?;

    let ctx = LogContext::new().with_field("userID", "9527");

    logger.info(&ctx, "Application started");
    logger.info(&ctx, "Loading configuration...");
    logger.warn(&ctx, "Using default settings for some options");
    logger.debug(&ctx, "Connecting to database...");
    logger.error(&ctx, "Failed to load optional plugin");

    for i in 1..=5 {
        logger.info(&ctx, format_args!("Processing item {}/5", i));
    }

    // Close the queue and wait for the writer to drain it
    logger.shutdown()?;

    let metrics = logger.metrics();
    println!("Lines written: {}", metrics.total_logged());
    println!("Lines dropped: {}", metrics.dropped_count());

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
