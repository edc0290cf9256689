//! Configuration validation
//!
//! Checks semantic constraints after deserialization. Hard errors are
//! reserved for configurations the ranking math cannot work with; legal but
//! suspicious values only warn.

use anyhow::Result;

use super::types::Config;

impl Config {
    /// Validate configuration for correctness
    ///
    /// - All weights must be finite and non-negative (the negative-feedback
    ///   penalty is a positive magnitude; the score function applies it
    ///   subtractively)
    /// - A zero list size or zero TTL is legal but almost certainly a
    ///   misconfiguration, so it is logged rather than rejected
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("positive_feedback_weight", self.ranking.positive_feedback_weight),
            ("comment_weight", self.ranking.comment_weight),
            ("like_weight", self.ranking.like_weight),
            ("view_weight", self.ranking.view_weight),
            (
                "negative_feedback_penalty",
                self.ranking.negative_feedback_penalty,
            ),
        ];

        for (name, value) in weights {
            if !value.is_finite() {
                return Err(anyhow::anyhow!(
                    "Ranking weight '{}' must be finite (got {})",
                    name,
                    value
                ));
            }
            if value < 0.0 {
                return Err(anyhow::anyhow!(
                    "Ranking weight '{}' cannot be negative (got {}); \
                     the negative-feedback penalty is applied subtractively already",
                    name,
                    value
                ));
            }
        }

        if self.featured.list_size == 0 {
            tracing::warn!("featured list_size is 0; every featured read will return an empty list");
        }

        if self.cache.featured_ttl.is_zero() {
            tracing::warn!(
                "featured_ttl is 0; caching is effectively disabled and every read hits the store"
            );
        }

        Ok(())
    }
}
