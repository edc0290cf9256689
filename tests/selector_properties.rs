//! Property-based tests for the featured-set selector
//!
//! Tests that selection satisfies its contract for arbitrary article sets:
//! - Output length never exceeds the requested limit
//! - Unpublished articles never appear
//! - A pinned article, when one exists, always takes the first slot
//! - The non-pinned suffix is ordered by score, ties by recency
//! - Selection is idempotent

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use featured_rank::{
    engagement_score, select_featured, Article, ArticleId, EngagementCounters, ScoreWeights,
};

fn arb_article() -> impl Strategy<Value = Article> {
    (
        any::<[u8; 16]>(),
        0u64..100,
        0u64..100,
        0u64..100,
        0u64..100,
        0u64..10_000,
        any::<bool>(),
        proptest::bool::weighted(0.15),
        0i64..2_000_000_000,
    )
        .prop_map(
            |(id_bytes, positive, negative, comments, likes, views, published, pinned, secs)| {
                Article {
                    id: ArticleId::from_uuid(Uuid::from_bytes(id_bytes)),
                    title: format!("article-{}", secs),
                    published,
                    is_featured_manual: pinned,
                    created_at: DateTime::<Utc>::from_timestamp(secs, 0).unwrap(),
                    counters: EngagementCounters {
                        positive_feedbacks: positive,
                        negative_feedbacks: negative,
                        comments_count: comments,
                        likes_count: likes,
                        total_views: views,
                    },
                }
            },
        )
}

fn arb_articles() -> impl Strategy<Value = Vec<Article>> {
    proptest::collection::vec(arb_article(), 0..40)
}

proptest! {
    /// Property: output never exceeds the requested limit
    #[test]
    fn prop_output_respects_limit(articles in arb_articles(), limit in 0usize..10) {
        let featured = select_featured(&articles, limit, &ScoreWeights::default());
        prop_assert!(featured.len() <= limit);
    }

    /// Property: unpublished articles are never selected
    #[test]
    fn prop_no_unpublished_output(articles in arb_articles(), limit in 0usize..10) {
        let featured = select_featured(&articles, limit, &ScoreWeights::default());
        prop_assert!(featured.iter().all(|r| r.article.published));
    }

    /// Property: when a published pinned article exists and the limit allows
    /// any output, the first slot holds a pinned article
    #[test]
    fn prop_pinned_takes_first_slot(articles in arb_articles(), limit in 1usize..10) {
        let has_published_pin = articles
            .iter()
            .any(|a| a.published && a.is_featured_manual);

        let featured = select_featured(&articles, limit, &ScoreWeights::default());

        if has_published_pin {
            prop_assert!(!featured.is_empty());
            prop_assert!(featured[0].article.is_featured_manual);
        }
    }

    /// Property: everything after the pinned head is ordered by score
    /// descending, ties by created_at descending
    #[test]
    fn prop_candidates_are_score_ordered(articles in arb_articles(), limit in 1usize..10) {
        let featured = select_featured(&articles, limit, &ScoreWeights::default());

        let suffix_start = usize::from(
            featured
                .first()
                .is_some_and(|head| head.article.is_featured_manual),
        );

        for pair in featured[suffix_start..].windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.score > b.score
                    || (a.score == b.score && a.article.created_at >= b.article.created_at)
            );
        }
    }

    /// Property: annotated scores match the score function
    #[test]
    fn prop_scores_match_score_function(articles in arb_articles(), limit in 1usize..10) {
        let weights = ScoreWeights::default();
        let featured = select_featured(&articles, limit, &weights);

        for ranked in &featured {
            prop_assert_eq!(
                ranked.score,
                engagement_score(&ranked.article.counters, &weights)
            );
        }
    }

    /// Property: selection over unchanged input is idempotent
    #[test]
    fn prop_selection_is_idempotent(articles in arb_articles(), limit in 0usize..10) {
        let weights = ScoreWeights::default();
        let first = select_featured(&articles, limit, &weights);
        let second = select_featured(&articles, limit, &weights);
        prop_assert_eq!(first, second);
    }
}
