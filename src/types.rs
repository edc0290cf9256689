//! Core types for articles and engagement tracking
//!
//! This module provides the article record, its engagement counters, and the
//! explicit counter-maintenance events applied by write paths.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Validation errors raised at the store-read boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("counter '{name}' cannot be negative (got {value})")]
    NegativeCounter { name: &'static str, value: i64 },
}

/// Unique identifier for articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    /// Generate a new unique article ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one read back from a store)
    #[must_use]
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-article engagement counters
///
/// All counters are non-negative aggregates maintained by write-time side
/// effects (feedback/comment/like creation and deletion). The ranking layer
/// only reads them; [`EngagementCounters::apply`] is the one sanctioned
/// mutation path.
///
/// Absent fields decode as 0, so partially-populated store rows are valid:
///
/// ```
/// use featured_rank::EngagementCounters;
///
/// let counters: EngagementCounters = toml::from_str("positive_feedbacks = 2").unwrap();
/// assert_eq!(counters.positive_feedbacks, 2);
/// assert_eq!(counters.total_views, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementCounters {
    pub positive_feedbacks: u64,
    pub negative_feedbacks: u64,
    pub comments_count: u64,
    pub likes_count: u64,
    pub total_views: u64,
}

impl EngagementCounters {
    /// Build counters from raw signed values as read from an external store
    ///
    /// Counter columns are signed in most SQL stores, so the boundary has to
    /// reject negative values rather than silently clamp them.
    pub fn from_raw(
        positive_feedbacks: i64,
        negative_feedbacks: i64,
        comments_count: i64,
        likes_count: i64,
        total_views: i64,
    ) -> Result<Self, ValidationError> {
        let check = |name: &'static str, value: i64| -> Result<u64, ValidationError> {
            u64::try_from(value).map_err(|_| ValidationError::NegativeCounter { name, value })
        };

        Ok(Self {
            positive_feedbacks: check("positive_feedbacks", positive_feedbacks)?,
            negative_feedbacks: check("negative_feedbacks", negative_feedbacks)?,
            comments_count: check("comments_count", comments_count)?,
            likes_count: check("likes_count", likes_count)?,
            total_views: check("total_views", total_views)?,
        })
    }

    /// Apply a single engagement event to these counters
    ///
    /// Removal events saturate at zero: a delete racing a missed insert must
    /// not drive a counter negative. Saturated removals are logged and
    /// otherwise ignored.
    pub fn apply(&mut self, event: EngagementEvent) {
        match event {
            EngagementEvent::FeedbackAdded { positive: true } => self.positive_feedbacks += 1,
            EngagementEvent::FeedbackAdded { positive: false } => self.negative_feedbacks += 1,
            EngagementEvent::FeedbackRemoved { positive: true } => {
                Self::decrement(&mut self.positive_feedbacks, "positive_feedbacks");
            }
            EngagementEvent::FeedbackRemoved { positive: false } => {
                Self::decrement(&mut self.negative_feedbacks, "negative_feedbacks");
            }
            EngagementEvent::CommentAdded => self.comments_count += 1,
            EngagementEvent::CommentRemoved => {
                Self::decrement(&mut self.comments_count, "comments_count");
            }
            EngagementEvent::LikeAdded => self.likes_count += 1,
            EngagementEvent::LikeRemoved => {
                Self::decrement(&mut self.likes_count, "likes_count");
            }
            EngagementEvent::Viewed => self.total_views += 1,
        }
    }

    fn decrement(counter: &mut u64, name: &'static str) {
        if *counter == 0 {
            warn!(counter = name, "ignoring removal event for already-zero counter");
        } else {
            *counter -= 1;
        }
    }
}

/// Explicit counter-maintenance operation
///
/// Each variant names one write-path side effect that must be reflected in
/// an article's counters before the next featured-list recomputation reads
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EngagementEvent {
    FeedbackAdded { positive: bool },
    FeedbackRemoved { positive: bool },
    CommentAdded,
    CommentRemoved,
    LikeAdded,
    LikeRemoved,
    Viewed,
}

/// An article as seen by the ranking and caching layers
///
/// Only the fields the selector reads are modeled here; body, author and the
/// rest of the editorial record live in the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    /// Gates visibility to the featured-set selector
    pub published: bool,
    /// Manual pin: at most one article may have this set at any time.
    /// The invariant is enforced by the store's write path, not the selector.
    pub is_featured_manual: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub counters: EngagementCounters,
}

impl Article {
    /// Create a fresh, unpublished article with zeroed counters
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ArticleId::new(),
            title: title.into(),
            published: false,
            is_featured_manual: false,
            created_at: Utc::now(),
            counters: EngagementCounters::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_uniqueness() {
        let a = ArticleId::new();
        let b = ArticleId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn article_id_display_matches_uuid() {
        let id = ArticleId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }

    #[test]
    fn from_raw_accepts_valid_counters() {
        let counters = EngagementCounters::from_raw(1, 2, 3, 4, 5).unwrap();
        assert_eq!(counters.positive_feedbacks, 1);
        assert_eq!(counters.negative_feedbacks, 2);
        assert_eq!(counters.comments_count, 3);
        assert_eq!(counters.likes_count, 4);
        assert_eq!(counters.total_views, 5);
    }

    #[test]
    fn from_raw_rejects_each_negative_position() {
        let cases = [
            (
                EngagementCounters::from_raw(-1, 0, 0, 0, 0),
                "positive_feedbacks",
            ),
            (
                EngagementCounters::from_raw(0, -1, 0, 0, 0),
                "negative_feedbacks",
            ),
            (
                EngagementCounters::from_raw(0, 0, -1, 0, 0),
                "comments_count",
            ),
            (EngagementCounters::from_raw(0, 0, 0, -1, 0), "likes_count"),
            (EngagementCounters::from_raw(0, 0, 0, 0, -1), "total_views"),
        ];

        for (result, name) in cases {
            assert_eq!(
                result,
                Err(ValidationError::NegativeCounter { name, value: -1 })
            );
        }
    }

    #[test]
    fn counters_decode_with_missing_fields() {
        let counters: EngagementCounters =
            toml::from_str("comments_count = 7\nlikes_count = 2").unwrap();
        assert_eq!(counters.comments_count, 7);
        assert_eq!(counters.likes_count, 2);
        assert_eq!(counters.positive_feedbacks, 0);
        assert_eq!(counters.total_views, 0);
    }

    #[test]
    fn apply_increments_each_counter() {
        let mut counters = EngagementCounters::default();

        counters.apply(EngagementEvent::FeedbackAdded { positive: true });
        counters.apply(EngagementEvent::FeedbackAdded { positive: false });
        counters.apply(EngagementEvent::CommentAdded);
        counters.apply(EngagementEvent::LikeAdded);
        counters.apply(EngagementEvent::Viewed);

        assert_eq!(
            counters,
            EngagementCounters {
                positive_feedbacks: 1,
                negative_feedbacks: 1,
                comments_count: 1,
                likes_count: 1,
                total_views: 1,
            }
        );
    }

    #[test]
    fn apply_removal_reverses_addition() {
        let mut counters = EngagementCounters::default();

        counters.apply(EngagementEvent::CommentAdded);
        counters.apply(EngagementEvent::CommentAdded);
        counters.apply(EngagementEvent::CommentRemoved);

        assert_eq!(counters.comments_count, 1);
    }

    #[test]
    fn apply_removal_saturates_at_zero() {
        let mut counters = EngagementCounters::default();

        counters.apply(EngagementEvent::LikeRemoved);
        counters.apply(EngagementEvent::FeedbackRemoved { positive: true });
        counters.apply(EngagementEvent::FeedbackRemoved { positive: false });
        counters.apply(EngagementEvent::CommentRemoved);

        assert_eq!(counters, EngagementCounters::default());
    }

    #[test]
    fn new_article_starts_unpublished_and_unpinned() {
        let article = Article::new("Getting started");
        assert!(!article.published);
        assert!(!article.is_featured_manual);
        assert_eq!(article.counters, EngagementCounters::default());
        assert_eq!(article.title, "Getting started");
    }

    #[test]
    fn article_round_trips_through_toml() {
        let mut article = Article::new("Serde check");
        article.published = true;
        article.counters.apply(EngagementEvent::Viewed);

        let encoded = toml::to_string(&article).unwrap();
        let decoded: Article = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, article);
    }
}
