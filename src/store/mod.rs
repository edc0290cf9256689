//! Article store abstraction
//!
//! The selector and cache treat the counter store as an external
//! collaborator reached through [`ArticleStore`]: any backend with point-read
//! and scan capability satisfies it. The write-path contract is synchronous
//! visibility: after a counter or flag mutation returns, the next
//! `published_articles` scan must observe it. Eventual consistency on a
//! separate lag is not acceptable for this trait.
//!
//! [`MemoryStore`] is the in-crate reference implementation and test double;
//! production deployments implement the trait over their database.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Article, ArticleId, EngagementEvent};

pub use memory::MemoryStore;

/// Errors surfaced by article store implementations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    #[error("article {id} not found")]
    NotFound { id: ArticleId },

    /// The backing store could not be reached or failed mid-operation.
    /// Callers must propagate this rather than substitute stale or zeroed
    /// counters; retry policy belongs to the caller.
    #[error("article store unavailable: {reason}")]
    Unavailable { reason: String },
}

impl StoreError {
    /// Convenience constructor for backend failures
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Read and write access to articles and their engagement counters
///
/// The scan (`published_articles`) is the only operation on the featured
/// read path and the crate's single suspension point.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Scan all published articles with their current counters and flags
    async fn published_articles(&self) -> Result<Vec<Article>, StoreError>;

    /// Point-read a single article
    async fn article(&self, id: ArticleId) -> Result<Option<Article>, StoreError>;

    /// Insert a new article record
    async fn insert_article(&self, article: Article) -> Result<(), StoreError>;

    /// Publish or unpublish an article
    async fn set_published(&self, id: ArticleId, published: bool) -> Result<(), StoreError>;

    /// Pin or unpin an article as manually featured
    ///
    /// Pinning must unset any previously pinned article in the same write, so
    /// at most one article carries the flag at any time.
    async fn set_manual_featured(&self, id: ArticleId, featured: bool) -> Result<(), StoreError>;

    /// Apply one engagement event to an article's counters
    ///
    /// The update must be visible to the next `published_articles` scan.
    async fn apply_engagement(
        &self,
        id: ArticleId,
        event: EngagementEvent,
    ) -> Result<(), StoreError>;
}
