//! Performance Metrics Module
//!
//! Standardized operation monitoring for the queue. Counters track how often
//! producers and consumers succeed, observe the queue empty, or lose a CAS race,
//! plus coarse operation timing. All counters are relaxed atomics; a snapshot is
//! a consistent-enough view for monitoring, not a linearizable observation.

use core::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// A point-in-time snapshot of queue activity
#[derive(Debug, Default, Clone)]
pub struct QueueMetrics {
    /// Number of completed push operations
    pub pushes: u64,
    /// Number of pop operations that returned a value
    pub pops: u64,
    /// Number of pop operations that observed the queue empty
    pub empty_pops: u64,
    /// Number of lost CAS races (claim or install retries)
    pub contended_operations: u64,
    /// Average completed-operation time in nanoseconds
    pub avg_operation_time_ns: u64,
    /// Maximum completed-operation time in nanoseconds
    pub max_operation_time_ns: u64,
}

impl QueueMetrics {
    /// Total number of operations, including empty pops
    pub fn total_operations(&self) -> u64 {
        self.pushes + self.pops + self.empty_pops
    }

    /// Fraction of pops that returned a value, as a percentage
    pub fn pop_hit_rate(&self) -> f64 {
        let attempts = self.pops + self.empty_pops;
        if attempts == 0 {
            0.0
        } else {
            (self.pops as f64 / attempts as f64) * 100.0
        }
    }

    /// Lost CAS races per operation, as a percentage
    pub fn contention_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            (self.contended_operations as f64 / total as f64) * 100.0
        }
    }

    /// Get average completed-operation time as a Duration
    pub fn avg_operation_time(&self) -> Duration {
        Duration::from_nanos(self.avg_operation_time_ns)
    }

    /// Get maximum completed-operation time as a Duration
    pub fn max_operation_time(&self) -> Duration {
        Duration::from_nanos(self.max_operation_time_ns)
    }
}

/// Internal atomic metrics collection
#[derive(Debug, Default)]
pub struct AtomicMetrics {
    pub pushes: AtomicU64,
    pub pops: AtomicU64,
    pub empty_pops: AtomicU64,
    pub contended_operations: AtomicU64,
    pub total_time_ns: AtomicU64,
    pub max_time_ns: AtomicU64,
}

impl AtomicMetrics {
    /// Record a completed push with its duration
    pub fn record_push(&self, duration: Duration) {
        self.pushes.fetch_add(1, Ordering::Relaxed);
        self.record_timing(duration);
    }

    /// Record a pop that returned a value, with its duration
    pub fn record_pop(&self, duration: Duration) {
        self.pops.fetch_add(1, Ordering::Relaxed);
        self.record_timing(duration);
    }

    /// Record a pop that observed the queue empty
    pub fn record_empty(&self) {
        self.empty_pops.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lost CAS race
    pub fn record_contention(&self) {
        self.contended_operations.fetch_add(1, Ordering::Relaxed);
    }

    fn record_timing(&self, duration: Duration) {
        let duration_ns = duration.as_nanos() as u64;
        self.total_time_ns.fetch_add(duration_ns, Ordering::Relaxed);

        let mut current_max = self.max_time_ns.load(Ordering::Relaxed);
        while duration_ns > current_max {
            match self.max_time_ns.compare_exchange_weak(
                current_max,
                duration_ns,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(x) => current_max = x,
            }
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> QueueMetrics {
        let pushes = self.pushes.load(Ordering::Relaxed);
        let pops = self.pops.load(Ordering::Relaxed);
        let empty_pops = self.empty_pops.load(Ordering::Relaxed);
        let contended = self.contended_operations.load(Ordering::Relaxed);
        let total_time = self.total_time_ns.load(Ordering::Relaxed);
        let max_time = self.max_time_ns.load(Ordering::Relaxed);

        let completed = pushes + pops;
        QueueMetrics {
            pushes,
            pops,
            empty_pops,
            contended_operations: contended,
            avg_operation_time_ns: if completed > 0 { total_time / completed } else { 0 },
            max_operation_time_ns: max_time,
        }
    }

    /// Reset all metrics
    pub fn reset(&self) {
        self.pushes.store(0, Ordering::Relaxed);
        self.pops.store(0, Ordering::Relaxed);
        self.empty_pops.store(0, Ordering::Relaxed);
        self.contended_operations.store(0, Ordering::Relaxed);
        self.total_time_ns.store(0, Ordering::Relaxed);
        self.max_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Trait for data structures that support performance metrics
pub trait MetricsCollector {
    /// Get current performance metrics
    fn metrics(&self) -> QueueMetrics;

    /// Reset all metrics
    fn reset_metrics(&self);

    /// Enable or disable metrics collection
    fn set_metrics_enabled(&self, enabled: bool);

    /// Check if metrics collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}
