//! Configuration module
//!
//! This module handles all configuration types, defaults, loading and
//! validation for the ranking and caching layers.

mod defaults;
mod loading;
mod types;
mod validation;

// Re-export public types
pub use loading::{create_default_config, load_config, load_config_with_fallback};
pub use types::{duration_serde, CacheConfig, Config, FeaturedConfig, RankingConfig};

// Re-export default functions for use in tests and other modules
pub use defaults::{
    comment_weight, featured_list_size, featured_ttl, like_weight, negative_feedback_penalty,
    positive_feedback_weight, view_weight,
};
