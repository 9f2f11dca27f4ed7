//! Basic logger usage example
//!
//! Demonstrates direct (stderr) logging with colored tags at different levels.
//!
//! Run with: cargo run --example basic_usage

use mlog::prelude::*;
use mlog::{error, info};

fn main() -> Result<()> {
    println!("=== mlog - Basic Usage Example ===\n");

    let ctx = LogContext::new().with_field("userID", "9527");

    println!("1. Logging at different levels (threshold INFO):");
    let logger = Logger::builder().level(LogLevel::Info).build()?;
    logger.trace(&ctx, "This is a trace message (hidden)");
    logger.info(&ctx, "This is an info message");
    logger.warn(&ctx, "This is a warning message");
    logger.debug(&ctx, "This is a debug message");
    logger.error(&ctx, "This is an error message");

    println!("\n2. Formatted messages:");
    info!(logger, &ctx, "Processing {} items", 100);
    error!(logger, &ctx, "Error code: {}, message: {}", 500, "Internal error");

    println!("\n3. Trace threshold adds the request id to every line:");
    let tracing = Logger::builder()
        .level(LogLevel::Trace)
        .trace_key("userID")
        .build()?;
    tracing.trace(&ctx, "Entering handler");
    tracing.info(&ctx, "Handled request");
    tracing.info(&(), "No request id available");

    println!("\n4. Panic level unwinds after logging:");
    let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panic(&ctx, "unrecoverable state");
    }));
    println!("   caught panic: {}", caught.is_err());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
