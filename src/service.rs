//! Featured-list service: store + selector + cache wiring
//!
//! [`FeaturedService`] owns the read-through path: cache lookup, store scan
//! on miss, selection, cache population. It also owns the write-path hooks
//! that must invalidate the cache (publish, unpublish, pin, unpin).
//! Everything is injected at construction; there is no global state.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::FeaturedCache;
use crate::config::Config;
use crate::metrics::MetricsCollector;
use crate::ranking::{select_featured, RankedArticle, ScoreWeights};
use crate::store::{ArticleStore, StoreError};
use crate::types::{ArticleId, EngagementEvent};

/// Logical cache key for the default featured list
///
/// Requests with a non-default limit derive their own key
/// (`featured_articles:<limit>`), so invalidation clears them all by prefix.
pub const FEATURED_CACHE_KEY: &str = "featured_articles";

/// Read-through featured-list service
///
/// Concurrent readers missing the cache at the same time may recompute the
/// list redundantly; the last `set` wins and all of them return correct
/// data. Engagement writes do not invalidate the cache: counter drift inside
/// the TTL window is accepted staleness, while publish/pin changes take
/// effect immediately.
pub struct FeaturedService<S> {
    store: Arc<S>,
    cache: FeaturedCache,
    weights: ScoreWeights,
    list_size: usize,
    featured_ttl: Duration,
    metrics: MetricsCollector,
}

impl<S: ArticleStore> FeaturedService<S> {
    /// Create a service from a store and configuration
    pub fn new(store: Arc<S>, config: &Config) -> Self {
        info!(
            list_size = config.featured.list_size,
            ttl_secs = config.cache.featured_ttl.as_secs(),
            "initializing featured service"
        );
        Self {
            store,
            cache: FeaturedCache::new(),
            weights: config.ranking.weights(),
            list_size: config.featured.list_size,
            featured_ttl: config.cache.featured_ttl,
            metrics: MetricsCollector::new(),
        }
    }

    /// Get the featured list at the configured length
    ///
    /// Served from cache when fresh; otherwise recomputed from a store scan
    /// and cached for the configured TTL. A store failure on the miss path
    /// propagates as [`StoreError`]; it is never papered over with stale or
    /// fabricated data. Entries still inside their TTL window keep serving
    /// regardless of store health.
    pub async fn featured(&self) -> Result<Arc<Vec<RankedArticle>>, StoreError> {
        self.featured_with_limit(self.list_size).await
    }

    /// Get the featured list at an explicit length
    ///
    /// Non-default limits are cached under their own derived key with the
    /// same TTL.
    pub async fn featured_with_limit(
        &self,
        limit: usize,
    ) -> Result<Arc<Vec<RankedArticle>>, StoreError> {
        self.metrics.record_request();
        let key = self.cache_key(limit);

        if let Some(cached) = self.cache.get(&key) {
            self.metrics.record_cache_hit();
            debug!(key = %key, articles = cached.len(), "serving featured list from cache");
            return Ok(cached);
        }
        self.metrics.record_cache_miss();

        let articles = match self.store.published_articles().await {
            Ok(articles) => articles,
            Err(err) => {
                self.metrics.record_store_error();
                warn!(error = %err, "store scan failed on featured cache miss");
                return Err(err);
            }
        };

        let ranked = Arc::new(select_featured(&articles, limit, &self.weights));
        self.cache
            .set(&key, Arc::clone(&ranked), self.featured_ttl);
        self.metrics.record_recomputation();
        info!(
            key = %key,
            scanned = articles.len(),
            selected = ranked.len(),
            "recomputed featured list"
        );
        Ok(ranked)
    }

    /// Publish an article and invalidate the featured cache
    pub async fn publish(&self, id: ArticleId) -> Result<(), StoreError> {
        self.store.set_published(id, true).await?;
        self.invalidate_featured();
        Ok(())
    }

    /// Unpublish an article and invalidate the featured cache
    pub async fn unpublish(&self, id: ArticleId) -> Result<(), StoreError> {
        self.store.set_published(id, false).await?;
        self.invalidate_featured();
        Ok(())
    }

    /// Pin an article to the top of the featured list
    ///
    /// The store unsets any previous pin in the same write, keeping the
    /// at-most-one invariant.
    pub async fn pin(&self, id: ArticleId) -> Result<(), StoreError> {
        self.store.set_manual_featured(id, true).await?;
        self.invalidate_featured();
        Ok(())
    }

    /// Remove an article's manual pin
    pub async fn unpin(&self, id: ArticleId) -> Result<(), StoreError> {
        self.store.set_manual_featured(id, false).await?;
        self.invalidate_featured();
        Ok(())
    }

    /// Forward one engagement event to the store
    ///
    /// Deliberately does NOT invalidate: the featured list may lag counter
    /// changes by up to the TTL.
    pub async fn record_engagement(
        &self,
        id: ArticleId,
        event: EngagementEvent,
    ) -> Result<(), StoreError> {
        self.store.apply_engagement(id, event).await
    }

    /// Access the underlying cache (stats, targeted invalidation)
    #[must_use]
    pub fn cache(&self) -> &FeaturedCache {
        &self.cache
    }

    /// Access the service metrics
    #[must_use]
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    fn cache_key(&self, limit: usize) -> String {
        if limit == self.list_size {
            FEATURED_CACHE_KEY.to_string()
        } else {
            format!("{FEATURED_CACHE_KEY}:{limit}")
        }
    }

    fn invalidate_featured(&self) {
        let removed = self.cache.invalidate_prefix(FEATURED_CACHE_KEY);
        self.metrics.record_invalidation();
        debug!(removed, "invalidated featured cache");
    }
}
