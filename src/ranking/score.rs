//! Engagement score computation
//!
//! Maps an article's five counters to a single real-valued score. The score
//! is derived state: computed on demand, cached only as part of a featured
//! list, never persisted.

use serde::{Deserialize, Serialize};

use crate::types::EngagementCounters;

/// Weights applied to each engagement counter
///
/// The defaults are policy constants, not values derived from data: positive
/// feedback is the strongest explicit endorsement, comments indicate deeper
/// engagement, likes are a lighter signal, raw views are the weakest and most
/// gameable signal, and negative feedback is penalized at unit weight.
/// Deployments may override them via configuration, but the defaults must
/// stay fixed because downstream expectations (editorial dashboards, ranking
/// regression checks) are calibrated against them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub positive_feedback: f64,
    pub comment: f64,
    pub like: f64,
    pub view: f64,
    /// Applied subtractively; stored as a positive magnitude
    pub negative_feedback: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            positive_feedback: 3.0,
            comment: 2.0,
            like: 1.5,
            view: 0.1,
            negative_feedback: 1.0,
        }
    }
}

/// Compute the engagement score for one article's counters
///
/// Pure and total: defined for every counter combination, all-zero counters
/// score 0.0. Negative results are possible when negative feedback outweighs
/// the positive signals.
///
/// # Examples
/// ```
/// use featured_rank::{engagement_score, EngagementCounters, ScoreWeights};
///
/// let counters = EngagementCounters {
///     positive_feedbacks: 2,
///     comments_count: 2,
///     likes_count: 1,
///     ..Default::default()
/// };
/// assert_eq!(engagement_score(&counters, &ScoreWeights::default()), 11.5);
/// ```
#[must_use]
pub fn engagement_score(counters: &EngagementCounters, weights: &ScoreWeights) -> f64 {
    counters.positive_feedbacks as f64 * weights.positive_feedback
        + counters.comments_count as f64 * weights.comment
        + counters.likes_count as f64 * weights.like
        + counters.total_views as f64 * weights.view
        - counters.negative_feedbacks as f64 * weights.negative_feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(
        positive: u64,
        negative: u64,
        comments: u64,
        likes: u64,
        views: u64,
    ) -> EngagementCounters {
        EngagementCounters {
            positive_feedbacks: positive,
            negative_feedbacks: negative,
            comments_count: comments,
            likes_count: likes,
            total_views: views,
        }
    }

    #[test]
    fn all_zero_counters_score_zero() {
        let score = engagement_score(&counters(0, 0, 0, 0, 0), &ScoreWeights::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn single_positive_feedback_scores_three() {
        let score = engagement_score(&counters(1, 0, 0, 0, 0), &ScoreWeights::default());
        assert_eq!(score, 3.0);
    }

    #[test]
    fn single_comment_scores_two() {
        let score = engagement_score(&counters(0, 0, 1, 0, 0), &ScoreWeights::default());
        assert_eq!(score, 2.0);
    }

    #[test]
    fn two_positive_feedbacks_score_six() {
        let score = engagement_score(&counters(2, 0, 0, 0, 0), &ScoreWeights::default());
        assert_eq!(score, 6.0);
    }

    #[test]
    fn mixed_counters_sum_per_weight() {
        // 2*3.0 + 2*2.0 + 1*1.5 = 11.5
        let score = engagement_score(&counters(2, 0, 2, 1, 0), &ScoreWeights::default());
        assert_eq!(score, 11.5);
    }

    #[test]
    fn views_contribute_a_tenth_each() {
        let score = engagement_score(&counters(0, 0, 0, 0, 10), &ScoreWeights::default());
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn negative_feedback_subtracts() {
        let score = engagement_score(&counters(1, 2, 0, 0, 0), &ScoreWeights::default());
        assert_eq!(score, 1.0);
    }

    #[test]
    fn score_can_go_below_zero() {
        let score = engagement_score(&counters(0, 5, 0, 0, 0), &ScoreWeights::default());
        assert_eq!(score, -5.0);
    }

    #[test]
    fn custom_weights_are_honored() {
        let weights = ScoreWeights {
            positive_feedback: 10.0,
            comment: 0.0,
            like: 0.0,
            view: 0.0,
            negative_feedback: 0.0,
        };
        let score = engagement_score(&counters(3, 9, 9, 9, 9), &weights);
        assert_eq!(score, 30.0);
    }
}
