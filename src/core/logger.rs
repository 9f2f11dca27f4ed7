//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::{LoggerError, Result},
    formatter::EntryFormatter,
    log_context::TraceContext,
    log_level::{LogLevel, TerminalAction},
    metrics::LoggerMetrics,
    pipeline::{Dispatcher, Pipeline},
};
use crate::appenders::ConsoleAppender;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Leveled logger.
///
/// Configuration is fixed at construction. In persistent (`release`) mode a
/// writer thread owns the appender and receives every line through a queue;
/// otherwise lines go straight to stderr with colored tags.
///
/// Messages take anything `Display`, so positional arguments are passed with
/// `format_args!` or through the [`info!`](crate::info) family of macros.
///
/// # Example
///
/// ```
/// use mlog::prelude::*;
///
/// let memory = MemoryAppender::new();
/// let mut logger = Logger::builder()
///     .persistent(memory.clone())
///     .level(LogLevel::Info)
///     .build()
///     .unwrap();
///
/// logger.info(&(), "hello");
/// logger.debug(&(), format_args!("{} items", 3));
/// logger.shutdown().unwrap();
///
/// assert_eq!(memory.lines(), vec!["[INFO] hello\n", "[DEBUG] 3 items\n"]);
/// ```
pub struct Logger {
    formatter: EntryFormatter,
    dispatcher: Dispatcher,
    metrics: Arc<LoggerMetrics>,
    sync_on_fatal: bool,
    fatal_exit_code: i32,
}

impl Logger {
    /// Build a logger and, in persistent mode, start its writer thread.
    ///
    /// `writer` is required when `config.release` is set and ignored otherwise.
    pub fn new(config: LoggerConfig, writer: Option<Box<dyn Appender>>) -> Result<Self> {
        let metrics = Arc::new(LoggerMetrics::new());

        let formatter = EntryFormatter::new(config.level, config.trace_key)
            .with_colors(!config.release && config.colors)
            .with_debug_separator(config.debug_separator);

        let dispatcher = if config.release {
            let writer = writer.ok_or_else(|| {
                LoggerError::config("writer", "persistent mode requires an appender")
            })?;
            Dispatcher::Persistent(Pipeline::spawn(
                writer,
                config.queue_capacity,
                Arc::clone(&metrics),
            )?)
        } else {
            Dispatcher::Direct(ConsoleAppender::new())
        };

        Ok(Self {
            formatter,
            dispatcher,
            metrics,
            sync_on_fatal: config.sync_on_fatal,
            fatal_exit_code: config.fatal_exit_code,
        })
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.formatter.threshold()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.formatter.threshold().allows(level)
    }

    pub fn is_persistent(&self) -> bool {
        self.dispatcher.is_persistent()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Log at `level`, running the level's terminal action afterwards
    #[track_caller]
    pub fn log(&self, level: LogLevel, ctx: &dyn TraceContext, message: impl fmt::Display) {
        let location = Location::caller();
        if level.terminal_action().is_some() {
            self.terminate(level, ctx, location, message.to_string());
        }
        self.emit(level, ctx, location, &message);
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, ctx: &dyn TraceContext, message: impl fmt::Display) {
        self.log(LogLevel::Trace, ctx, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, ctx: &dyn TraceContext, message: impl fmt::Display) {
        self.log(LogLevel::Info, ctx, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, ctx: &dyn TraceContext, message: impl fmt::Display) {
        self.log(LogLevel::Warn, ctx, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, ctx: &dyn TraceContext, message: impl fmt::Display) {
        self.log(LogLevel::Debug, ctx, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, ctx: &dyn TraceContext, message: impl fmt::Display) {
        self.log(LogLevel::Error, ctx, message);
    }

    /// Log, then panic with the rendered message.
    ///
    /// The panic happens even when `Panic` is below the threshold.
    #[track_caller]
    pub fn panic(&self, ctx: &dyn TraceContext, message: impl fmt::Display) -> ! {
        self.terminate(LogLevel::Panic, ctx, Location::caller(), message.to_string())
    }

    /// Log, then exit the process with the configured exit code (0 by default).
    ///
    /// In persistent mode the line is only guaranteed to be enqueued, not
    /// written, unless `sync_on_fatal` is enabled.
    #[track_caller]
    pub fn fatal(&self, ctx: &dyn TraceContext, message: impl fmt::Display) -> ! {
        self.terminate(LogLevel::Fatal, ctx, Location::caller(), message.to_string())
    }

    // `panic!` below reports the user's call site through `#[track_caller]`
    #[track_caller]
    fn emit(
        &self,
        level: LogLevel,
        ctx: &dyn TraceContext,
        location: &Location<'_>,
        message: &dyn fmt::Display,
    ) {
        if !self.is_enabled(level) {
            self.metrics.record_filtered();
            return;
        }

        let line = self.formatter.format(level, ctx, location, message);
        if let Err(e) = self.dispatcher.dispatch(line, &self.metrics) {
            // Logging after shutdown is a caller bug; never drop the line silently
            panic!("mlog: log call after shutdown: {}", e);
        }
    }

    #[track_caller]
    fn terminate(
        &self,
        level: LogLevel,
        ctx: &dyn TraceContext,
        location: &Location<'_>,
        message: String,
    ) -> ! {
        self.emit(level, ctx, location, &message);

        match level.terminal_action() {
            Some(TerminalAction::Exit) => {
                if self.sync_on_fatal {
                    if let Err(e) = self.dispatcher.sync() {
                        eprintln!("[LOGGER ERROR] Failed to sync before exit: {}", e);
                    }
                }
                std::process::exit(self.fatal_exit_code)
            }
            Some(TerminalAction::Unwind) => panic!("{}", message),
            None => unreachable!("{} has no terminal action", level),
        }
    }

    /// Block until every line logged so far has reached the sink
    pub fn sync(&self) -> Result<()> {
        self.dispatcher.sync()
    }

    /// Close the queue and wait for the writer thread to drain it.
    ///
    /// Every line enqueued before this call is written before it returns.
    /// Logging afterwards panics.
    ///
    /// # Example
    ///
    /// ```
    /// use mlog::prelude::*;
    ///
    /// let memory = MemoryAppender::new();
    /// let mut logger = Logger::builder().persistent(memory.clone()).build().unwrap();
    /// for i in 0..3 {
    ///     logger.info(&(), format_args!("request {}", i));
    /// }
    /// logger.shutdown().unwrap();
    /// assert_eq!(memory.len(), 3);
    /// ```
    pub fn shutdown(&mut self) -> Result<()> {
        self.dispatcher.shutdown()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.dispatcher.shutdown() {
            eprintln!("[LOGGER ERROR] Failed to drain during shutdown: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use mlog::prelude::*;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Trace)
///     .trace_key("userID")
///     .build()
///     .unwrap();
/// assert!(!logger.is_persistent());
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            appender: None,
        }
    }

    /// Replace all options at once, keeping the appender
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn release(mut self, release: bool) -> Self {
        self.config.release = release;
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn trace_key(mut self, key: impl Into<String>) -> Self {
        self.config.trace_key = key.into();
        self
    }

    /// Set the sink used in persistent mode
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Shorthand for `.release(true).appender(appender)`
    #[must_use = "builder methods return a new value"]
    pub fn persistent<A: Appender + 'static>(self, appender: A) -> Self {
        self.release(true).appender(appender)
    }

    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug_separator(mut self, enabled: bool) -> Self {
        self.config.debug_separator = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.config.colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sync_on_fatal(mut self, enabled: bool) -> Self {
        self.config.sync_on_fatal = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fatal_exit_code(mut self, code: i32) -> Self {
        self.config.fatal_exit_code = code;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        Logger::new(self.config, self.appender)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::MemoryAppender;
    use crate::core::log_context::LogContext;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn persistent(level: LogLevel) -> (Logger, MemoryAppender) {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .persistent(memory.clone())
            .level(level)
            .trace_key("userID")
            .build()
            .expect("Failed to build logger");
        (logger, memory)
    }

    #[test]
    fn test_builder_default_is_direct() {
        let logger = Logger::builder().build().unwrap();
        assert!(!logger.is_persistent());
        assert_eq!(logger.level(), LogLevel::Info);
    }

    #[test]
    fn test_release_without_appender_is_rejected() {
        let err = Logger::builder().release(true).build().err().expect("build should fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_info_scenario() {
        let (mut logger, memory) = persistent(LogLevel::Info);
        logger.info(&(), "hello");
        logger.shutdown().unwrap();

        assert_eq!(memory.lines(), vec!["[INFO] hello\n"]);
    }

    #[test]
    fn test_error_reports_call_site() {
        let (mut logger, memory) = persistent(LogLevel::Info);
        let line = line!() + 1;
        logger.error(&(), "boom");
        logger.shutdown().unwrap();

        assert_eq!(
            memory.lines(),
            vec![format!("[ERROR][caller:{}:{}] boom\n", file!(), line)]
        );
    }

    #[test]
    fn test_log_reports_call_site() {
        let (mut logger, memory) = persistent(LogLevel::Info);
        let line = line!() + 1;
        logger.log(LogLevel::Error, &(), "generic");
        logger.shutdown().unwrap();

        assert!(memory.contents().contains(&format!("[caller:{}:{}]", file!(), line)));
    }

    #[test]
    fn test_trace_scenario() {
        let (mut logger, memory) = persistent(LogLevel::Trace);
        let ctx = LogContext::new().with_field("userID", "42");
        logger.info(&ctx, "x");
        logger.shutdown().unwrap();

        assert_eq!(memory.lines(), vec!["[trace:42][INFO] x\n"]);
    }

    #[test]
    fn test_filtered_calls_write_nothing() {
        let (mut logger, memory) = persistent(LogLevel::Error);
        logger.info(&(), "skip");
        logger.warn(&(), "skip");
        logger.debug(&(), "skip");
        logger.trace(&(), "skip");
        logger.error(&(), "keep");
        logger.shutdown().unwrap();

        assert_eq!(memory.len(), 1);
        assert_eq!(logger.metrics().filtered_count(), 4);
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_persistent_tags_are_plain() {
        let (mut logger, memory) = persistent(LogLevel::Info);
        logger.warn(&(), "w");
        logger.shutdown().unwrap();

        assert!(!memory.contents().contains('\x1b'));
    }

    #[test]
    fn test_panic_logs_then_unwinds() {
        let (mut logger, memory) = persistent(LogLevel::Info);

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.panic(&(), format_args!("bad input {}", 7));
        }));
        let payload = result.expect_err("panic level must unwind");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("bad input 7"));

        logger.shutdown().unwrap();
        let lines = memory.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[PANIC][caller:"));
        assert!(lines[0].ends_with("] bad input 7\n"));
    }

    #[test]
    fn test_panic_unwinds_when_filtered() {
        let (mut logger, memory) = persistent(LogLevel::Fatal);

        let result = catch_unwind(AssertUnwindSafe(|| {
            logger.log(LogLevel::Panic, &(), "quiet");
        }));
        assert!(result.is_err());

        logger.shutdown().unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    #[should_panic(expected = "log call after shutdown")]
    fn test_log_after_shutdown_panics() {
        let (mut logger, _memory) = persistent(LogLevel::Info);
        logger.shutdown().unwrap();
        logger.info(&(), "too late");
    }

    #[test]
    fn test_filtered_call_after_shutdown_is_silent() {
        let (mut logger, _memory) = persistent(LogLevel::Warn);
        logger.shutdown().unwrap();
        logger.info(&(), "below threshold, never dispatched");
    }

    #[test]
    fn test_sync_makes_lines_visible() {
        let (logger, memory) = persistent(LogLevel::Info);
        for i in 0..5 {
            logger.info(&(), format_args!("{}", i));
        }
        logger.sync().unwrap();
        assert_eq!(memory.len(), 5);
    }

    #[test]
    fn test_drop_drains_queue() {
        let memory = MemoryAppender::new();
        {
            let logger = Logger::builder()
                .persistent(memory.clone())
                .queue_capacity(32)
                .build()
                .unwrap();
            for i in 0..20 {
                logger.info(&(), format_args!("{}", i));
            }
        }
        assert_eq!(memory.len(), 20);
    }

    #[test]
    fn test_direct_mode_counts_writes() {
        let logger = Logger::builder().level(LogLevel::Warn).build().unwrap();
        logger.info(&(), "filtered");
        logger.warn(&(), "direct mode goes to stderr");

        assert_eq!(logger.metrics().filtered_count(), 1);
        assert_eq!(logger.metrics().total_logged() + logger.metrics().dropped_count(), 1);
        logger.sync().unwrap();
    }
}
