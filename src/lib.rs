//! # mlog
//!
//! A minimal leveled logger that serializes concurrent writes through a
//! single background writer.
//!
//! ## Features
//!
//! - **Ordered writes**: in persistent mode one writer thread owns the sink and
//!   writes lines in the order they were enqueued
//! - **Trace correlation**: a request id read from a context is prepended to
//!   every line when the logger runs at `Trace`
//! - **Caller location**: `Error`, `Panic` and `Fatal` lines name the call site
//! - **Terminal levels**: `Panic` unwinds and `Fatal` exits after logging

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, FieldValue, LogContext, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Result, TerminalAction, TraceContext,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
pub use core::{
    Appender, EntryFormatter, FieldValue, LogContext, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, TerminalAction, TraceContext,
    DEFAULT_FATAL_EXIT_CODE, NO_VALUE,
};
