//! Featured-set selection
//!
//! Produces the ordered list of articles for the "featured" slot: the
//! manually pinned article first (at most one), then the remaining published
//! articles ordered by engagement score.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, warn};

use crate::ranking::score::{engagement_score, ScoreWeights};
use crate::types::Article;

/// An article annotated with the score it was ranked by
///
/// The score is carried for caller visibility (dashboards, debugging); it is
/// not persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedArticle {
    pub article: Article,
    pub score: f64,
}

impl RankedArticle {
    fn new(article: &Article, weights: &ScoreWeights) -> Self {
        Self {
            article: article.clone(),
            score: engagement_score(&article.counters, weights),
        }
    }
}

/// Select the ordered featured list from a set of articles
///
/// Unpublished articles are skipped even if the caller's scan was sloppy; the
/// featured list must never surface them. The first pinned article
/// encountered takes the top slot; any further pinned articles violate the
/// at-most-one invariant maintained by the write path, so they are logged and
/// demoted to ordinary candidates rather than silently corrected.
///
/// Candidates are ordered by score descending, ties broken by `created_at`
/// descending (newest first). The result holds at most `limit` entries; a
/// `limit` of 0 yields an empty list.
///
/// # Examples
/// ```
/// use featured_rank::{select_featured, Article, ScoreWeights};
///
/// let mut article = Article::new("Launch post");
/// article.published = true;
/// article.counters.positive_feedbacks = 2;
///
/// let featured = select_featured(&[article], 3, &ScoreWeights::default());
/// assert_eq!(featured.len(), 1);
/// assert_eq!(featured[0].score, 6.0);
/// ```
#[must_use]
pub fn select_featured(
    articles: &[Article],
    limit: usize,
    weights: &ScoreWeights,
) -> Vec<RankedArticle> {
    if limit == 0 {
        return Vec::new();
    }

    let mut pinned: Option<&Article> = None;
    let mut candidates: Vec<&Article> = Vec::with_capacity(articles.len());

    for article in articles {
        if !article.published {
            debug!(article_id = %article.id, "skipping unpublished article");
            continue;
        }
        if article.is_featured_manual {
            if pinned.is_none() {
                pinned = Some(article);
                continue;
            }
            // Invariant violation owned by the write path; see the store's
            // set_manual_featured. First pin wins, the rest compete on score.
            warn!(
                article_id = %article.id,
                "multiple manually featured articles; ranking extra pin as a regular candidate"
            );
        }
        candidates.push(article);
    }

    let mut ranked: Vec<RankedArticle> = candidates
        .iter()
        .map(|article| RankedArticle::new(article, weights))
        .collect();

    // Scores are finite for any counter values, so partial_cmp only fails on
    // equal-NaN pairs that cannot occur; ties fall through to recency.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.article.created_at.cmp(&a.article.created_at))
    });

    let mut featured = Vec::with_capacity(limit.min(ranked.len() + 1));
    if let Some(pin) = pinned {
        featured.push(RankedArticle::new(pin, weights));
    }
    let remaining = limit - featured.len();
    featured.extend(ranked.into_iter().take(remaining));
    featured
}
