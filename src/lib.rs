//! Engagement ranking and featured-article caching
//!
//! This crate is the ranking core of a content platform: it turns per-article
//! engagement counters (feedback, comments, likes, views) into an ordered
//! "featured" list and serves that list through a TTL-bounded read-through
//! cache with explicit invalidation.
//!
//! # Architecture
//!
//! - [`types`] - articles, engagement counters and the events that maintain
//!   them
//! - [`ranking`] - the pure score function and the featured-set selector
//! - [`cache`] - the read-through cache keyed by logical name
//! - [`store`] - the article-store trait plus an in-memory reference
//!   implementation
//! - [`service`] - the read-through wiring and the write hooks that
//!   invalidate the cache
//! - [`config`] / [`metrics`] / [`logging`] - ambient concerns
//!
//! Counter maintenance is an explicit operation
//! ([`ArticleStore::apply_engagement`]) with a synchronous-visibility
//! contract: once a write returns, the next scan observes it. The featured
//! list itself may lag counter changes by up to the cache TTL; publish and
//! pin changes invalidate immediately.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use featured_rank::{config, Article, ArticleStore, FeaturedService, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = config::load_config_with_fallback("featured-rank.toml")?;
//!     let store = Arc::new(MemoryStore::new());
//!
//!     let article = Article::new("Why ranking beats recency");
//!     let id = article.id;
//!     store.insert_article(article).await?;
//!
//!     let service = FeaturedService::new(store, &config);
//!     service.publish(id).await?;
//!
//!     for ranked in service.featured().await?.iter() {
//!         println!("{:.1}  {}", ranked.score, ranked.article.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod ranking;
pub mod service;
pub mod store;
pub mod types;

pub use cache::{CacheStats, FeaturedCache};
pub use config::{create_default_config, load_config, load_config_with_fallback, Config};
pub use metrics::{MetricsCollector, MetricsSnapshot};
pub use ranking::{engagement_score, select_featured, RankedArticle, ScoreWeights};
pub use service::{FeaturedService, FEATURED_CACHE_KEY};
pub use store::{ArticleStore, MemoryStore, StoreError};
pub use types::{Article, ArticleId, EngagementCounters, EngagementEvent, ValidationError};
