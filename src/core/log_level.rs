//! Log level definitions

use colored::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call.
///
/// Levels form a single linear order by declaration. `Debug` ranks above
/// `Warn`, and `Panic`/`Fatal` are ordinary high-rank levels that also carry a
/// [`TerminalAction`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Debug = 3,
    Error = 4,
    Panic = 5,
    Fatal = 6,
}

/// Side effect performed after a log line has been dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    /// Unwind the calling thread with the rendered message
    Unwind,
    /// Terminate the process
    Exit,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Debug,
        LogLevel::Error,
        LogLevel::Panic,
        LogLevel::Fatal,
    ];

    #[inline]
    pub const fn rank(&self) -> u8 {
        *self as u8
    }

    /// Whether a call at `level` passes a logger configured with `self` as threshold
    #[inline]
    pub fn allows(&self, level: LogLevel) -> bool {
        level.rank() >= self.rank()
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Debug => "DEBUG",
            LogLevel::Error => "ERROR",
            LogLevel::Panic => "PANIC",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Bracketed tag written in front of every message
    pub fn tag(&self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE]",
            LogLevel::Info => "[INFO]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Error => "[ERROR]",
            LogLevel::Panic => "[PANIC]",
            LogLevel::Fatal => "[FATAL]",
        }
    }

    pub fn color_code(&self) -> Color {
        use colored::Color::*;
        match self {
            LogLevel::Trace => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Warn => Yellow,
            LogLevel::Debug => Blue,
            LogLevel::Error => Red,
            LogLevel::Panic => Magenta,
            LogLevel::Fatal => Cyan,
        }
    }

    /// Levels that get a `[caller:file:line]` segment
    pub fn records_caller(&self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Panic | LogLevel::Fatal)
    }

    pub fn terminal_action(&self) -> Option<TerminalAction> {
        match self {
            LogLevel::Panic => Some(TerminalAction::Unwind),
            LogLevel::Fatal => Some(TerminalAction::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "DEBUG" => Ok(LogLevel::Debug),
            "ERROR" => Ok(LogLevel::Error),
            "PANIC" => Ok(LogLevel::Panic),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
