//! Logger configuration

use super::error::Result;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Exit code used by `fatal` unless configured otherwise
pub const DEFAULT_FATAL_EXIT_CODE: i32 = 0;

/// Options recognized when building a [`Logger`](crate::Logger).
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```
/// use mlog::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{ "release": true, "level": "trace" }"#).unwrap();
/// assert!(config.release);
/// assert_eq!(config.level, LogLevel::Trace);
/// assert_eq!(config.trace_key, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// `true` queues lines to the supplied appender, `false` writes to stderr
    pub release: bool,
    /// Minimum level; `Trace` also turns on trace decoration
    pub level: LogLevel,
    /// Context key holding the trace id
    pub trace_key: String,
    /// Channel bound for persistent mode, `0` for a rendezvous queue
    pub queue_capacity: usize,
    /// Put a blank between `[DEBUG]` and the message
    pub debug_separator: bool,
    /// Colorize level tags in direct mode
    pub colors: bool,
    /// Wait for the writer to flush before `fatal` exits the process
    pub sync_on_fatal: bool,
    pub fatal_exit_code: i32,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            release: false,
            level: LogLevel::Info,
            trace_key: String::new(),
            queue_capacity: 0,
            debug_separator: true,
            colors: true,
            sync_on_fatal: false,
            fatal_exit_code: DEFAULT_FATAL_EXIT_CODE,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
