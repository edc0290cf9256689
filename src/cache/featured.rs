//! Read-through cache for computed featured lists
//!
//! Keyed by logical name (e.g. "featured_articles"). Entries hold the ranked
//! payload behind an `Arc`, an absolute expiry timestamp and a hit counter.
//! Expiry is checked lazily on the read path; there is no background sweeper.
//!
//! Concurrent misses may recompute the same payload redundantly. That is
//! accepted: recomputation is cheap relative to a single-flight layer, and
//! `set` is wholesale atomic replacement, so readers always observe either
//! the old entry or the new one in full.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tracing::debug;

use crate::cache::ttl;
use crate::ranking::RankedArticle;

/// A single cached featured list
///
/// Never partially updated: `set` replaces the whole entry.
#[derive(Debug, Clone)]
struct CacheEntry {
    payload: Arc<Vec<RankedArticle>>,
    inserted_at_millis: u64,
    expires_at_millis: u64,
    hits: Arc<AtomicU64>,
}

impl CacheEntry {
    fn new(payload: Arc<Vec<RankedArticle>>, ttl: Duration) -> Self {
        let inserted_at_millis = ttl::now_millis();
        Self {
            payload,
            inserted_at_millis,
            expires_at_millis: ttl::expires_at(inserted_at_millis, ttl),
            hits: Arc::new(AtomicU64::new(0)),
        }
    }

    fn is_expired_at(&self, now_millis: u64) -> bool {
        ttl::is_expired(self.expires_at_millis, now_millis)
    }
}

/// Cache-wide statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entry_count: usize,
    pub hits: u64,
    pub misses: u64,
}

/// TTL-bounded read-through cache keyed by logical name
///
/// Cloning shares the underlying map and counters, so one instance can be
/// handed to both the service and a metrics reporter. The cache is an
/// explicitly constructed value: callers inject it where needed instead of
/// reaching for a process-global.
///
/// Lookups take `&str` directly; keys are stored as `Arc<str>` and
/// `Borrow<str>` keeps the read path allocation-free.
#[derive(Debug, Clone, Default)]
pub struct FeaturedCache {
    entries: Arc<DashMap<Arc<str>, CacheEntry>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl FeaturedCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached payload for `key` if present and not expired
    ///
    /// An expired entry is removed on this read path and counts as a miss;
    /// the caller is expected to recompute and `set`.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<RankedArticle>>> {
        let now = ttl::now_millis();

        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => {
                entry.hits.fetch_add(1, Ordering::Relaxed);
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Some(Arc::clone(&entry.payload));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            // Re-check under the removal so a concurrent set replacing the
            // expired entry with a fresh one is not thrown away.
            self.entries
                .remove_if(key, |_, entry| entry.is_expired_at(now));
            debug!(key, "evicted expired cache entry");
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store `payload` under `key` with the given TTL
    ///
    /// Replaces any prior entry wholesale; readers see either the old or the
    /// new entry, never a mix. The TTL is chosen per call, so different keys
    /// can tolerate different amounts of staleness.
    pub fn set(&self, key: &str, payload: Arc<Vec<RankedArticle>>, ttl: Duration) {
        let entry = CacheEntry::new(payload, ttl);
        debug!(
            key,
            inserted_at_millis = entry.inserted_at_millis,
            expires_at_millis = entry.expires_at_millis,
            "caching payload"
        );
        self.entries.insert(Arc::from(key), entry);
    }

    /// Drop the entry for `key` immediately, regardless of expiry
    ///
    /// Returns whether an entry was present. The next `get` for this key is
    /// guaranteed to miss.
    pub fn invalidate(&self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key, "invalidated cache entry");
        }
        removed
    }

    /// Drop every entry whose key starts with `prefix`
    ///
    /// Used when one logical name fans out into derived keys (e.g. per-limit
    /// featured lists). Returns the number of entries removed.
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!(prefix, removed, "invalidated cache entries by prefix");
        }
        removed
    }

    /// Number of entries currently stored (expired-but-unread included)
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Hits recorded for one entry since it was last set
    ///
    /// Invalidation and replacement reset the counter along with the entry.
    #[must_use]
    pub fn entry_hits(&self, key: &str) -> Option<u64> {
        self.entries
            .get(key)
            .map(|entry| entry.hits.load(Ordering::Relaxed))
    }

    /// Cache-wide hit rate as a percentage (0.0 to 100.0)
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }

    /// Snapshot of the cache counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
