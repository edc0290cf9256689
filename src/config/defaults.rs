//! Default values for configuration fields
//!
//! This module centralizes all default value functions used in serde
//! deserialization. The ranking weights are policy constants; see
//! [`crate::ranking::ScoreWeights`] for why they must not drift.

use std::time::Duration;

/// Default weight for a positive feedback
#[inline]
pub fn positive_feedback_weight() -> f64 {
    3.0
}

/// Default weight for a comment
#[inline]
pub fn comment_weight() -> f64 {
    2.0
}

/// Default weight for a like
#[inline]
pub fn like_weight() -> f64 {
    1.5
}

/// Default weight for a single view
#[inline]
pub fn view_weight() -> f64 {
    0.1
}

/// Default penalty magnitude for a negative feedback
#[inline]
pub fn negative_feedback_penalty() -> f64 {
    1.0
}

/// Default featured list length
#[inline]
pub fn featured_list_size() -> usize {
    5
}

/// Default TTL for the featured-list cache (3 minutes)
///
/// Product decision balancing staleness against store load.
#[inline]
pub fn featured_ttl() -> Duration {
    Duration::from_secs(180)
}
