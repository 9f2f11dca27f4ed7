//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_context;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod pipeline;

pub use appender::Appender;
pub use config::{LoggerConfig, DEFAULT_FATAL_EXIT_CODE};
pub use error::{LoggerError, Result};
pub use formatter::EntryFormatter;
pub use log_context::{FieldValue, LogContext, TraceContext, NO_VALUE};
pub use log_level::{LogLevel, TerminalAction};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use pipeline::{Dispatcher, Pipeline};
