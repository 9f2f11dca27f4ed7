//! Per-logger delivery counters
//!
//! Each log call ends in one of three places. Calls below the threshold are
//! counted as filtered. Admitted lines are counted by the writer once the
//! appender accepts them, or as dropped when the appender fails or panics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared between a [`Logger`](crate::Logger) and its writer thread.
///
/// Counters use relaxed ordering, so a read taken while lines are in flight
/// may lag. Values are exact after `sync` or `shutdown`.
///
/// # Example
///
/// ```
/// use mlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_logged();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.total_logged(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines the sink failed to accept
    dropped_count: AtomicU64,

    /// Lines the sink accepted
    total_logged: AtomicU64,

    /// Calls rejected by the level threshold
    filtered_count: AtomicU64,
}

impl LoggerMetrics {
    /// All counters at zero
    pub const fn new() -> Self {
        Self {
            dropped_count: AtomicU64::new(0),
            total_logged: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    /// Record a line lost to a sink failure, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of admitted lines the appender lost, in percent.
    ///
    /// Filtered calls are not part of the total. `0.0` before any line
    /// reached the writer.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_logged() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Point-in-time copy, detached from the live counters
    fn clone(&self) -> Self {
        Self {
            dropped_count: AtomicU64::new(self.dropped_count()),
            total_logged: AtomicU64::new(self.total_logged()),
            filtered_count: AtomicU64::new(self.filtered_count()),
        }
    }
}
