//! Logger metrics for observability
//!
//! Counters describing what loggers did with the events they received.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use styled_line_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.events_written(), 1);
/// assert_eq!(metrics.events_filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Events rendered and handed to the appender successfully
    events_written: AtomicU64,

    /// Events rejected by the level filter
    events_filtered: AtomicU64,

    /// Stack traces rendered alongside written events
    throwables_rendered: AtomicU64,

    /// Appender writes that returned an error
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            events_written: AtomicU64::new(0),
            events_filtered: AtomicU64::new(0),
            throwables_rendered: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn events_written(&self) -> u64 {
        self.events_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn events_filtered(&self) -> u64 {
        self.events_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn throwables_rendered(&self) -> u64 {
        self.throwables_rendered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.events_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_filtered(&self) {
        self.events_filtered.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_throwable(&self) {
        self.throwables_rendered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of attempted writes that failed
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let attempted = failed + self.events_written() as f64;
        if attempted == 0.0 {
            0.0
        } else {
            failed / attempted * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.events_written.store(0, Ordering::Relaxed);
        self.events_filtered.store(0, Ordering::Relaxed);
        self.throwables_rendered.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}
