//! Metrics collection for the featured read path
//!
//! Lock-free counters updated from the service hot path with minimal
//! overhead. All methods are safe to call concurrently from any thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Thread-safe metrics collector for the featured read/write paths
///
/// Cloning shares the underlying counters, so the service and a reporting
/// task can hold the same collector.
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    featured_requests: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    recomputations: AtomicU64,
    store_errors: AtomicU64,
    invalidations: AtomicU64,

    // Start time for uptime calculation
    start_time: Instant,
}

/// Snapshot of current metrics (for display/reporting)
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub featured_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub recomputations: u64,
    pub store_errors: u64,
    pub invalidations: u64,
    pub uptime: Duration,
}

impl MetricsCollector {
    /// Create a new metrics collector
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                featured_requests: AtomicU64::new(0),
                cache_hits: AtomicU64::new(0),
                cache_misses: AtomicU64::new(0),
                recomputations: AtomicU64::new(0),
                store_errors: AtomicU64::new(0),
                invalidations: AtomicU64::new(0),
                start_time: Instant::now(),
            }),
        }
    }

    /// Record one featured-list request
    pub fn record_request(&self) {
        self.inner.featured_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache hit
    pub fn record_cache_hit(&self) {
        self.inner.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss
    pub fn record_cache_miss(&self) {
        self.inner.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one selector recomputation (cache-miss path completed)
    pub fn record_recomputation(&self) {
        self.inner.recomputations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed store read
    pub fn record_store_error(&self) {
        self.inner.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an explicit cache invalidation
    pub fn record_invalidation(&self) {
        self.inner.invalidations.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a consistent-enough snapshot of all counters
    ///
    /// Counters are read individually with relaxed ordering; exact cross-
    /// counter consistency is not needed for reporting.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            featured_requests: self.inner.featured_requests.load(Ordering::Relaxed),
            cache_hits: self.inner.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.inner.cache_misses.load(Ordering::Relaxed),
            recomputations: self.inner.recomputations.load(Ordering::Relaxed),
            store_errors: self.inner.store_errors.load(Ordering::Relaxed),
            invalidations: self.inner.invalidations.load(Ordering::Relaxed),
            uptime: self.inner.start_time.elapsed(),
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let snapshot = MetricsCollector::new().snapshot();
        assert_eq!(snapshot.featured_requests, 0);
        assert_eq!(snapshot.cache_hits, 0);
        assert_eq!(snapshot.cache_misses, 0);
        assert_eq!(snapshot.recomputations, 0);
        assert_eq!(snapshot.store_errors, 0);
        assert_eq!(snapshot.invalidations, 0);
    }

    #[test]
    fn records_accumulate() {
        let metrics = MetricsCollector::new();

        metrics.record_request();
        metrics.record_request();
        metrics.record_cache_hit();
        metrics.record_cache_miss();
        metrics.record_recomputation();
        metrics.record_store_error();
        metrics.record_invalidation();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.featured_requests, 2);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(snapshot.cache_misses, 1);
        assert_eq!(snapshot.recomputations, 1);
        assert_eq!(snapshot.store_errors, 1);
        assert_eq!(snapshot.invalidations, 1);
    }

    #[test]
    fn clones_share_counters() {
        let metrics = MetricsCollector::new();
        let clone = metrics.clone();

        clone.record_request();

        assert_eq!(metrics.snapshot().featured_requests, 1);
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let metrics = MetricsCollector::new();
        let mut handles = Vec::new();

        for _ in 0..8 {
            let metrics = metrics.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..1000 {
                    metrics.record_request();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.snapshot().featured_requests, 8000);
    }
}
