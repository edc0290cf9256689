//! In-memory article store
//!
//! Reference implementation of [`ArticleStore`] backed by a `tokio` RwLock.
//! Mutations hold the write lock for their full duration, which gives the
//! synchronous-visibility guarantee the trait requires for free.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::store::{ArticleStore, StoreError};
use crate::types::{Article, ArticleId, EngagementEvent};

/// In-memory store keyed by article id
///
/// Scans return articles sorted newest-first (ties by id) so repeated scans
/// over unchanged data produce identical orderings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: RwLock<HashMap<ArticleId, Article>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of articles currently stored (published or not)
    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    /// Whether the store holds no articles
    pub async fn is_empty(&self) -> bool {
        self.articles.read().await.is_empty()
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn published_articles(&self) -> Result<Vec<Article>, StoreError> {
        let articles = self.articles.read().await;
        let mut published: Vec<Article> = articles
            .values()
            .filter(|article| article.published)
            .cloned()
            .collect();
        // Stable scan order: newest first, id as the final tie-breaker
        published.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(published)
    }

    async fn article(&self, id: ArticleId) -> Result<Option<Article>, StoreError> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn insert_article(&self, article: Article) -> Result<(), StoreError> {
        debug!(article_id = %article.id, title = %article.title, "inserting article");
        self.articles.write().await.insert(article.id, article);
        Ok(())
    }

    async fn set_published(&self, id: ArticleId, published: bool) -> Result<(), StoreError> {
        let mut articles = self.articles.write().await;
        let article = articles.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        article.published = published;
        debug!(article_id = %id, published, "updated publish flag");
        Ok(())
    }

    async fn set_manual_featured(&self, id: ArticleId, featured: bool) -> Result<(), StoreError> {
        let mut articles = self.articles.write().await;
        if !articles.contains_key(&id) {
            return Err(StoreError::NotFound { id });
        }

        if featured {
            // One write, one pin: clearing previous pins here is what keeps
            // the at-most-one invariant out of the selector's hands.
            for (other_id, other) in articles.iter_mut() {
                if other.is_featured_manual && *other_id != id {
                    other.is_featured_manual = false;
                    debug!(article_id = %other_id, "unpinning previously featured article");
                }
            }
        }

        // Checked above, but avoid the panic path regardless
        let article = articles.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        article.is_featured_manual = featured;
        debug!(article_id = %id, featured, "updated manual feature flag");
        Ok(())
    }

    async fn apply_engagement(
        &self,
        id: ArticleId,
        event: EngagementEvent,
    ) -> Result<(), StoreError> {
        let mut articles = self.articles.write().await;
        let article = articles.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        article.counters.apply(event);
        debug!(article_id = %id, ?event, "applied engagement event");
        Ok(())
    }
}
