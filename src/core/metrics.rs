//! Dispatch metrics for fire-and-forget handlers
//!
//! Detached units never report back to the caller. These counters are the
//! only window into what happened to them.

use super::error::HandlerError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback invoked inside a detached unit with an error nobody else sees
pub type ErrorCallback = Arc<dyn Fn(&HandlerError) + Send + Sync>;

/// Counters for records dispatched to detached units
///
/// # Example
///
/// ```
/// use rust_log_handlers::DispatchMetrics;
///
/// let metrics = DispatchMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_failed();
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.failed(), 1);
/// assert_eq!(metrics.pending(), 0);
/// ```
#[derive(Debug)]
pub struct DispatchMetrics {
    dispatched: AtomicU64,
    completed: AtomicU64,
    failed: AtomicU64,
    panicked: AtomicU64,
}

impl DispatchMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            completed: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            panicked: AtomicU64::new(0),
        }
    }

    /// Records handed to a detached unit
    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    /// Units whose inner handler returned `Ok`
    #[inline]
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Units whose inner handler returned an error
    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Units whose inner handler panicked
    #[inline]
    pub fn panicked(&self) -> u64 {
        self.panicked.load(Ordering::Relaxed)
    }

    /// Units dispatched but not yet finished
    pub fn pending(&self) -> u64 {
        let finished = self.completed() + self.failed() + self.panicked();
        self.dispatched().saturating_sub(finished)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_completed(&self) -> u64 {
        self.completed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_panicked(&self) -> u64 {
        self.panicked.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.completed.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        self.panicked.store(0, Ordering::Relaxed);
    }
}

impl Default for DispatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DispatchMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched()),
            completed: AtomicU64::new(self.completed()),
            failed: AtomicU64::new(self.failed()),
            panicked: AtomicU64::new(self.panicked()),
        }
    }
}
