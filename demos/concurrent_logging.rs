//! Concurrent logging example
//!
//! Demonstrates many threads sharing one persistent logger. The writer thread
//! serializes every line, so none interleave.
//!
//! Run with: cargo run --example concurrent_logging

use mlog::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== mlog - Concurrent Logging Example ===\n");

    let json = r#"{
        "release": true,
        "level": "trace",
        "trace_key": "request_id",
        "queue_capacity": 256
    }"#;
    let config = LoggerConfig::from_json(json)?;
    let logger = Arc::new(Logger::new(
        config,
        Some(Box::new(FileAppender::new("concurrent.log")?)),
    )?);

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            let ctx = LogContext::new().with_field("request_id", format!("req-{}", thread_id));
            for i in 0..20 {
                logger.info(&ctx, format_args!("Thread {} - Message {}", thread_id, i));
                thread::sleep(Duration::from_millis(1));
            }
        }));
    }

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("a producer thread panicked");
        }
    }

    logger.sync()?;
    println!("5 threads logged 20 messages each");
    println!("Lines written: {}", logger.metrics().total_logged());

    // Dropping the last handle drains the queue and joins the writer
    drop(logger);

    println!("\n=== Example completed successfully! ===");
    println!("Check 'concurrent.log' for file output");

    Ok(())
}
