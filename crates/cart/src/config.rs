//! Cart cache configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_CACHE_MAX_CARTS` - Maximum number of cached carts (default: 10000)
//! - `CART_CACHE_TTL_SECS` - Seconds a cart survives without a write
//!   (default: 1800)

use std::time::Duration;

use thiserror::Error;

/// Default maximum number of carts held in the cache.
const DEFAULT_MAX_CARTS: u64 = 10_000;

/// Default cart time-to-live. Carts are session-scoped; half an hour of
/// inactivity means the session is gone.
const DEFAULT_TTL_SECS: u64 = 1800;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart cache sizing and expiry configuration.
#[derive(Debug, Clone)]
pub struct CartCacheConfig {
    /// Maximum number of carts kept in the cache before eviction.
    pub max_carts: u64,
    /// How long a cart survives without being written. Every write
    /// refreshes the clock.
    pub time_to_live: Duration,
}

impl Default for CartCacheConfig {
    fn default() -> Self {
        Self {
            max_carts: DEFAULT_MAX_CARTS,
            time_to_live: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}

impl CartCacheConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse as
    /// a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_raw(
            std::env::var("CART_CACHE_MAX_CARTS").ok(),
            std::env::var("CART_CACHE_TTL_SECS").ok(),
        )
    }

    /// Build a configuration from raw variable values, applying defaults
    /// for missing ones.
    fn from_raw(
        max_carts: Option<String>,
        ttl_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let max_carts = parse_or_default("CART_CACHE_MAX_CARTS", max_carts, DEFAULT_MAX_CARTS)?;
        let ttl_secs = parse_or_default("CART_CACHE_TTL_SECS", ttl_secs, DEFAULT_TTL_SECS)?;

        Ok(Self {
            max_carts,
            time_to_live: Duration::from_secs(ttl_secs),
        })
    }
}

/// Parse an optional raw value as a positive integer, falling back to the
/// default when absent.
fn parse_or_default(key: &str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    let value = raw
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = CartCacheConfig::from_raw(None, None).unwrap();
        assert_eq!(config.max_carts, DEFAULT_MAX_CARTS);
        assert_eq!(config.time_to_live, Duration::from_secs(DEFAULT_TTL_SECS));
    }

    #[test]
    fn test_explicit_values() {
        let config =
            CartCacheConfig::from_raw(Some("500".to_string()), Some("60".to_string())).unwrap();
        assert_eq!(config.max_carts, 500);
        assert_eq!(config.time_to_live, Duration::from_secs(60));
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let result = CartCacheConfig::from_raw(Some("lots".to_string()), None);
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let result = CartCacheConfig::from_raw(None, Some("-5".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_zero_value_is_rejected() {
        let result = CartCacheConfig::from_raw(Some("0".to_string()), None);
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
