//! Configuration Module
//!
//! Handles loading the cache and server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_VALIDITY_SECS, MAX_VALIDITY};
use crate::error::{CacheError, Result};

/// Cache and server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of live entries before eviction kicks in
    pub cache_capacity: usize,
    /// Validity window in seconds for cached metadata, 0 disables caching
    pub cache_validity_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached entries (default: 128)
    /// - `CACHE_VALIDITY_SECS` - Validity window in seconds (default: 2)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
            cache_validity_secs: env::var("CACHE_VALIDITY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_VALIDITY_SECS),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Rejects configurations the cache cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.cache_capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "cache capacity must be positive".to_string(),
            ));
        }
        if self.cache_validity_secs > MAX_VALIDITY.as_secs() {
            return Err(CacheError::InvalidConfig(format!(
                "CACHE_VALIDITY_SECS must not exceed {}",
                MAX_VALIDITY.as_secs()
            )));
        }
        Ok(())
    }

    /// Returns the validity window as a Duration.
    pub fn cache_validity(&self) -> Duration {
        Duration::from_secs(self.cache_validity_secs)
    }

    /// A zero validity window disables caching altogether.
    pub fn caching_enabled(&self) -> bool {
        self.cache_validity_secs > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            cache_validity_secs: DEFAULT_VALIDITY_SECS,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_capacity, 128);
        assert_eq!(config.cache_validity_secs, 2);
        assert_eq!(config.server_port, 3000);
        assert!(config.caching_enabled());
        assert_eq!(config.cache_validity(), Duration::from_secs(2));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("CACHE_VALIDITY_SECS");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.cache_capacity, 128);
        assert_eq!(config.cache_validity_secs, 2);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_zero_validity_disables_caching() {
        let config = Config {
            cache_validity_secs: 0,
            ..Config::default()
        };
        assert!(!config.caching_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = Config {
            cache_capacity: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_validity_rejected() {
        let config = Config {
            cache_validity_secs: u64::MAX,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CacheError::InvalidConfig(_))));

        let config = Config {
            cache_validity_secs: MAX_VALIDITY.as_secs(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
