//! Line formatting
//!
//! Turns a level, a context and a user message into the final line handed to
//! the writer. Layout:
//!
//! ```text
//! [trace:<id>][LEVEL][caller:<file>:<line>] message\n
//! ```
//!
//! The trace segment appears only when the logger threshold is `Trace`; the
//! caller segment only for levels where [`LogLevel::records_caller`] holds.

use super::log_context::{TraceContext, NO_VALUE};
use super::log_level::LogLevel;
use std::fmt::{self, Write};
use std::panic::Location;

const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone)]
pub struct EntryFormatter {
    threshold: LogLevel,
    trace_key: String,
    colorize: bool,
    debug_separator: bool,
}

impl EntryFormatter {
    pub fn new(threshold: LogLevel, trace_key: impl Into<String>) -> Self {
        Self {
            threshold,
            trace_key: trace_key.into(),
            colorize: false,
            debug_separator: true,
        }
    }

    /// Wrap the level tag in ANSI color codes
    #[must_use]
    pub fn with_colors(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Whether `[DEBUG]` is followed by a blank before the message
    #[must_use]
    pub fn with_debug_separator(mut self, debug_separator: bool) -> Self {
        self.debug_separator = debug_separator;
        self
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn trace_key(&self) -> &str {
        &self.trace_key
    }

    /// Trace decoration is tied to the threshold, not to the level of the call
    pub fn traces(&self) -> bool {
        self.threshold == LogLevel::Trace
    }

    pub fn format(
        &self,
        level: LogLevel,
        ctx: &dyn TraceContext,
        location: &Location<'_>,
        message: &dyn fmt::Display,
    ) -> String {
        let mut line = String::with_capacity(64);

        if self.traces() {
            let value = ctx.lookup(&self.trace_key);
            line.push_str("[trace:");
            line.push_str(value.as_deref().unwrap_or(NO_VALUE));
            line.push(']');
        }

        if self.colorize {
            let _ = write!(
                line,
                "\x1b[{}m{}{}",
                level.color_code().to_fg_str(),
                level.tag(),
                COLOR_RESET
            );
        } else {
            line.push_str(level.tag());
        }

        if level.records_caller() {
            let _ = write!(line, "[caller:{}:{}] ", location.file(), location.line());
        } else if level != LogLevel::Debug || self.debug_separator {
            line.push(' ');
        }

        // Arguments are substituted into the message only, never into the prefix
        let _ = write!(line, "{}", message);
        line.push('\n');
        line
    }
}
