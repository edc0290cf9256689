//! Configuration loading from files and environment variables
//!
//! Configuration comes from a TOML file, with environment variable overrides
//! for container deployments:
//! - `FEATURED_RANK_TTL_SECS` - featured-list cache TTL in seconds
//! - `FEATURED_RANK_LIST_SIZE` - featured list length

use std::time::Duration;

use anyhow::Result;

use super::types::Config;

/// Apply environment variable overrides to a loaded configuration
fn apply_env_overrides(config: &mut Config) {
    if let Ok(raw) = std::env::var("FEATURED_RANK_TTL_SECS") {
        match raw.parse::<u64>() {
            Ok(secs) => {
                tracing::info!(secs, "overriding featured cache TTL from environment");
                config.cache.featured_ttl = Duration::from_secs(secs);
            }
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    "ignoring unparseable FEATURED_RANK_TTL_SECS"
                );
            }
        }
    }

    if let Ok(raw) = std::env::var("FEATURED_RANK_LIST_SIZE") {
        match raw.parse::<usize>() {
            Ok(size) => {
                tracing::info!(size, "overriding featured list size from environment");
                config.featured.list_size = size;
            }
            Err(_) => {
                tracing::warn!(
                    value = %raw,
                    "ignoring unparseable FEATURED_RANK_LIST_SIZE"
                );
            }
        }
    }
}

/// Load configuration from a TOML file, with environment variable overrides
pub fn load_config(config_path: &str) -> Result<Config> {
    let config_content = std::fs::read_to_string(config_path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", config_path, e))?;

    let mut config: Config = toml::from_str(&config_content)
        .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", config_path, e))?;

    apply_env_overrides(&mut config);

    // Validate the loaded configuration
    config.validate()?;

    Ok(config)
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist
///
/// A missing file is an expected deployment state (defaults are complete);
/// an unreadable or invalid file is still an error.
pub fn load_config_with_fallback(config_path: &str) -> Result<Config> {
    if !std::path::Path::new(config_path).exists() {
        tracing::info!(
            path = config_path,
            "config file not found, using default configuration"
        );
        let mut config = create_default_config();
        apply_env_overrides(&mut config);
        config.validate()?;
        return Ok(config);
    }

    load_config(config_path)
}

/// Create a default configuration for examples/testing
#[must_use]
pub fn create_default_config() -> Config {
    Config::default()
}
