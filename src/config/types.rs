//! Configuration type definitions
//!
//! All sections and fields are optional in the TOML source; an empty file
//! deserializes to the default configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ranking::ScoreWeights;

use super::defaults;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Score weights for the engagement ranking
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Featured-list shape
    #[serde(default)]
    pub featured: FeaturedConfig,
    /// Cache behavior
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Score weight configuration
///
/// Defaults mirror [`ScoreWeights::default`]; overriding them is supported
/// but changes ranking behavior for every consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RankingConfig {
    pub positive_feedback_weight: f64,
    pub comment_weight: f64,
    pub like_weight: f64,
    pub view_weight: f64,
    /// Positive magnitude; applied subtractively by the score function
    pub negative_feedback_penalty: f64,
}

impl RankingConfig {
    /// Convert the configured weights into the ranking layer's type
    #[must_use]
    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            positive_feedback: self.positive_feedback_weight,
            comment: self.comment_weight,
            like: self.like_weight,
            view: self.view_weight,
            negative_feedback: self.negative_feedback_penalty,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            positive_feedback_weight: defaults::positive_feedback_weight(),
            comment_weight: defaults::comment_weight(),
            like_weight: defaults::like_weight(),
            view_weight: defaults::view_weight(),
            negative_feedback_penalty: defaults::negative_feedback_penalty(),
        }
    }
}

/// Featured-list configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeaturedConfig {
    /// How many articles the featured list holds
    pub list_size: usize,
}

impl Default for FeaturedConfig {
    fn default() -> Self {
        Self {
            list_size: defaults::featured_list_size(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Time-to-live for the featured-list cache key, in seconds
    #[serde(with = "duration_serde", default = "defaults::featured_ttl")]
    pub featured_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            featured_ttl: defaults::featured_ttl(),
        }
    }
}

/// Helper for serializing Duration as whole seconds
pub mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cache.featured_ttl, Duration::from_secs(180));
        assert_eq!(config.featured.list_size, 5);
    }

    #[test]
    fn default_weights_match_ranking_defaults() {
        let config = Config::default();
        assert_eq!(config.ranking.weights(), ScoreWeights::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ranking]
            view_weight = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.ranking.view_weight, 0.5);
        assert_eq!(config.ranking.comment_weight, 2.0);
        assert_eq!(config.featured.list_size, 5);
    }

    #[test]
    fn ttl_round_trips_as_seconds() {
        let config: Config = toml::from_str("[cache]\nfeatured_ttl = 60").unwrap();
        assert_eq!(config.cache.featured_ttl, Duration::from_secs(60));

        let encoded = toml::to_string(&config).unwrap();
        assert!(encoded.contains("featured_ttl = 60"));
    }

    #[test]
    fn full_config_round_trips() {
        let config: Config = toml::from_str(
            r#"
            [ranking]
            positive_feedback_weight = 4.0
            comment_weight = 2.5
            like_weight = 1.0
            view_weight = 0.2
            negative_feedback_penalty = 2.0

            [featured]
            list_size = 3

            [cache]
            featured_ttl = 300
            "#,
        )
        .unwrap();

        let encoded = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }
}
