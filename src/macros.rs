//! Logging macros with `format!`-style argument substitution.
//!
//! Arguments are substituted into the message only; the level tag, trace and
//! caller segments are assembled separately and never re-interpreted.
//!
//! # Examples
//!
//! ```
//! use mlog::prelude::*;
//! use mlog::info;
//!
//! let logger = Logger::builder().build().unwrap();
//! let ctx = LogContext::new().with_field("userID", "9527");
//!
//! info!(logger, &ctx, "Server started");
//!
//! let port = 8080;
//! info!(logger, &ctx, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use mlog::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use mlog::log;
/// log!(logger, LogLevel::Info, &(), "Simple message");
/// log!(logger, LogLevel::Error, &(), "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.log($level, $ctx, format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use mlog::prelude::*;
/// # let logger = Logger::builder().level(LogLevel::Trace).build().unwrap();
/// use mlog::trace;
/// trace!(logger, &(), "Entering function: calculate()");
/// trace!(logger, &(), "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.trace($ctx, format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.info($ctx, format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use mlog::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use mlog::warn;
/// warn!(logger, &(), "Low disk space");
/// warn!(logger, &(), "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.warn($ctx, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.debug($ctx, format_args!($($arg)+))
    };
}

/// Log an error-level message with the caller location.
///
/// # Examples
///
/// ```
/// # use mlog::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use mlog::error;
/// error!(logger, &(), "Failed to connect to database");
/// error!(logger, &(), "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.error($ctx, format_args!($($arg)+))
    };
}

/// Log a panic-level message, then panic with it.
///
/// Named `log_panic!` so it never shadows `std::panic!`.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.panic($ctx, format_args!($($arg)+))
    };
}

/// Log a fatal-level message, then exit the process.
///
/// # Examples
///
/// ```no_run
/// # use mlog::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use mlog::fatal;
/// fatal!(logger, &(), "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $logger.fatal($ctx, format_args!($($arg)+))
    };
}
