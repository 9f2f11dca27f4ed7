//! Write serialization
//!
//! In persistent mode every formatted line goes through a channel to a single
//! writer thread that owns the appender, so lines reach the sink one at a time
//! and in enqueue order no matter how many threads are logging. Direct mode
//! skips the queue and writes to stderr from the calling thread.

use super::{
    appender::Appender,
    error::{panic_message, LoggerError, Result},
    metrics::LoggerMetrics,
};
use crate::appenders::ConsoleAppender;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

enum Command {
    Line(String),
    /// Acknowledged once every earlier line is written and the appender flushed
    Barrier(Sender<()>),
}

/// Single-consumer queue feeding one writer thread
pub struct Pipeline {
    sender: Option<Sender<Command>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Pipeline {
    /// Start the writer thread.
    ///
    /// `capacity` is the channel bound; `0` makes every enqueue a rendezvous
    /// with the writer.
    pub fn spawn<A>(appender: A, capacity: usize, metrics: Arc<LoggerMetrics>) -> Result<Self>
    where
        A: Appender + 'static,
    {
        let (sender, receiver) = bounded(capacity);

        let handle = thread::Builder::new()
            .name("mlog-writer".to_string())
            .spawn(move || Self::run(appender, receiver, &metrics))
            .map_err(|e| LoggerError::io_operation("spawning writer thread", "mlog-writer", e))?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    fn run<A: Appender>(mut appender: A, receiver: Receiver<Command>, metrics: &LoggerMetrics) {
        // Iteration ends once every sender is dropped and the queue is empty
        for command in receiver.iter() {
            match command {
                Command::Line(line) => {
                    Self::write_line(&mut appender, &line, metrics);
                    if receiver.is_empty() {
                        Self::flush(&mut appender);
                    }
                }
                Command::Barrier(ack) => {
                    Self::flush(&mut appender);
                    let _ = ack.send(());
                }
            }
        }
        Self::flush(&mut appender);
    }

    /// Write one line with panic isolation so a broken appender cannot kill the writer
    fn write_line<A: Appender>(appender: &mut A, line: &str, metrics: &LoggerMetrics) {
        match catch_unwind(AssertUnwindSafe(|| appender.append(line))) {
            Ok(Ok(())) => {
                metrics.record_logged();
            }
            Ok(Err(e)) => {
                metrics.record_dropped();
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
            }
            Err(panic_info) => {
                metrics.record_dropped();
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}. The writer keeps running.",
                    appender.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }

    fn flush<A: Appender>(appender: &mut A) {
        match catch_unwind(AssertUnwindSafe(|| appender.flush())) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' flush failed: {}", appender.name(), e);
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked during flush: {}",
                    appender.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }

    /// Enqueue a line, blocking until the channel accepts it
    pub fn submit(&self, line: String) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::LoggerStopped)?;
        sender
            .send(Command::Line(line))
            .map_err(|_| LoggerError::ChannelSendError)
    }

    /// Block until everything enqueued before this call is in the sink
    pub fn sync(&self) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(LoggerError::LoggerStopped)?;
        let (ack, done) = bounded(1);
        sender
            .send(Command::Barrier(ack))
            .map_err(|_| LoggerError::ChannelSendError)?;
        done.recv().map_err(|_| LoggerError::ChannelSendError)
    }

    pub fn is_running(&self) -> bool {
        self.sender.is_some()
    }

    /// Close the queue and wait for the writer to drain it.
    ///
    /// Calling this more than once is a no-op.
    pub fn shutdown(&mut self) -> Result<()> {
        drop(self.sender.take());

        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|e| LoggerError::WorkerPanicked(panic_message(e.as_ref())))?;
        }
        Ok(())
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Writer thread failed during shutdown: {}", e);
        }
    }
}

/// Where formatted lines go, fixed when the logger is built
pub enum Dispatcher {
    /// Synchronous, unserialized writes to stderr
    Direct(ConsoleAppender),
    /// Queued writes through the writer thread
    Persistent(Pipeline),
}

impl Dispatcher {
    pub fn dispatch(&self, line: String, metrics: &LoggerMetrics) -> Result<()> {
        match self {
            Dispatcher::Direct(console) => {
                // Sink failures are never reported to the caller
                match console.emit(&line) {
                    Ok(()) => metrics.record_logged(),
                    Err(_) => metrics.record_dropped(),
                };
                Ok(())
            }
            Dispatcher::Persistent(pipeline) => pipeline.submit(line),
        }
    }

    pub fn sync(&self) -> Result<()> {
        match self {
            Dispatcher::Direct(console) => console.clone().flush(),
            Dispatcher::Persistent(pipeline) => pipeline.sync(),
        }
    }

    pub fn shutdown(&mut self) -> Result<()> {
        match self {
            Dispatcher::Direct(_) => Ok(()),
            Dispatcher::Persistent(pipeline) => pipeline.shutdown(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Dispatcher::Persistent(_))
    }
}
