//! Atomic device statistics for lock-free usage tracking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Snapshot of device usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceStats {
    /// Successful opens.
    pub opens: u64,
    /// Opens rejected because the device was held.
    pub busy_rejections: u64,
    /// Completed reads.
    pub reads: u64,
    /// Time spent computing across all reads, in nanoseconds.
    pub compute_ns: u64,
}

/// Atomic counters behind [`DeviceStats`].
pub struct AtomicDeviceStats {
    opens: AtomicU64,
    busy_rejections: AtomicU64,
    reads: AtomicU64,
    compute_ns: AtomicU64,
}

impl AtomicDeviceStats {
    /// Create new zeroed stats.
    pub fn new() -> Self {
        Self {
            opens: AtomicU64::new(0),
            busy_rejections: AtomicU64::new(0),
            reads: AtomicU64::new(0),
            compute_ns: AtomicU64::new(0),
        }
    }

    /// Take a snapshot of current stats.
    pub fn snapshot(&self) -> DeviceStats {
        DeviceStats {
            opens: self.opens.load(Ordering::Relaxed),
            busy_rejections: self.busy_rejections.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            compute_ns: self.compute_ns.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters.
    pub fn reset(&self) {
        self.opens.store(0, Ordering::Relaxed);
        self.busy_rejections.store(0, Ordering::Relaxed);
        self.reads.store(0, Ordering::Relaxed);
        self.compute_ns.store(0, Ordering::Relaxed);
    }

    pub fn record_open(&self) {
        self.opens.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_busy(&self) {
        self.busy_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one read that took `elapsed`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn record_read(&self, elapsed: Duration) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.compute_ns
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }
}

impl Default for AtomicDeviceStats {
    fn default() -> Self {
        Self::new()
    }
}
