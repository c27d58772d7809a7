//! Metrics hooks for name filter operations
//!
//! Counters for inserts, admissions, lookups and merges performed through
//! the shared service, plus cumulative latencies.
//!
//! ## Usage
//!
//! ```ignore
//! use bloom_names::metrics::{Metrics, MetricsRecorder};
//!
//! let metrics = Metrics::new();
//!
//! let start = std::time::Instant::now();
//! let found = filter.contains("alice");
//! metrics.record_lookup(start.elapsed(), found);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for name filter operations
///
/// Thread-safe counters; all updates use relaxed ordering.
#[derive(Default)]
pub struct Metrics {
    /// Total add calls that reached the filter
    pub names_added: AtomicU64,
    /// Add calls whose name was not already present
    pub names_admitted: AtomicU64,
    /// Add calls refused because the filter was over capacity
    pub inserts_rejected: AtomicU64,
    /// Total lookups performed
    pub lookups_performed: AtomicU64,
    /// Lookups that reported the name present
    pub lookups_positive: AtomicU64,
    /// Total filter merges
    pub filters_merged: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
    /// Cumulative insert time in nanoseconds
    pub insert_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an insert
    ///
    /// # Arguments
    /// * `duration` - Time taken, lock wait included
    /// * `admitted` - Whether the name was new to the filter
    pub fn record_insert(&self, duration: Duration, admitted: bool) {
        self.names_added.fetch_add(1, Ordering::Relaxed);
        self.insert_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if admitted {
            self.names_admitted.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an insert refused over capacity
    pub fn record_rejected(&self) {
        self.inserts_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup
    ///
    /// # Arguments
    /// * `duration` - Time taken for the lookup
    /// * `found` - Whether the name was reported present (possibly false positive)
    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a filter merge
    pub fn record_merge(&self) {
        self.filters_merged.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            names_added: self.names_added.load(Ordering::Relaxed),
            names_admitted: self.names_admitted.load(Ordering::Relaxed),
            inserts_rejected: self.inserts_rejected.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            filters_merged: self.filters_merged.load(Ordering::Relaxed),
            avg_lookup_ns: average(&self.lookup_time_ns, &self.lookups_performed),
            avg_insert_ns: average(&self.insert_time_ns, &self.names_added),
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.names_added.store(0, Ordering::Relaxed);
        self.names_admitted.store(0, Ordering::Relaxed);
        self.inserts_rejected.store(0, Ordering::Relaxed);
        self.lookups_performed.store(0, Ordering::Relaxed);
        self.lookups_positive.store(0, Ordering::Relaxed);
        self.filters_merged.store(0, Ordering::Relaxed);
        self.lookup_time_ns.store(0, Ordering::Relaxed);
        self.insert_time_ns.store(0, Ordering::Relaxed);
    }
}

fn average(total: &AtomicU64, count: &AtomicU64) -> u64 {
    let total = total.load(Ordering::Relaxed);
    let count = count.load(Ordering::Relaxed);
    if count > 0 {
        total / count
    } else {
        0
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub names_added: u64,
    pub names_admitted: u64,
    pub inserts_rejected: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub filters_merged: u64,
    pub avg_lookup_ns: u64,
    pub avg_insert_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this to forward filter activity to an external metrics system.
pub trait MetricsRecorder: Send + Sync {
    /// Record an insert
    fn record_insert(&self, duration: Duration, admitted: bool);

    /// Record an insert refused over capacity
    fn record_rejected(&self);

    /// Record a lookup
    fn record_lookup(&self, duration: Duration, found: bool);

    /// Record a filter merge
    fn record_merge(&self);
}

impl MetricsRecorder for Metrics {
    fn record_insert(&self, duration: Duration, admitted: bool) {
        Metrics::record_insert(self, duration, admitted)
    }

    fn record_rejected(&self) {
        Metrics::record_rejected(self)
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        Metrics::record_lookup(self, duration, found)
    }

    fn record_merge(&self) {
        Metrics::record_merge(self)
    }
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_insert(&self, _duration: Duration, _admitted: bool) {}
    fn record_rejected(&self) {}
    fn record_lookup(&self, _duration: Duration, _found: bool) {}
    fn record_merge(&self) {}
}
