//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Upper bound on the summed byte size of cached bitmaps
    pub capacity_bytes: usize,
    /// Maximum number of URLs warmed up per preload call
    pub preload_limit: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `IMAGE_CACHE_CAPACITY_BYTES` - Memory budget in bytes (default: 10 MiB)
    /// - `IMAGE_CACHE_PRELOAD_LIMIT` - URLs fetched per preload (default: 5)
    pub fn from_env() -> Self {
        Self {
            capacity_bytes: env::var("IMAGE_CACHE_CAPACITY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY_BYTES),
            preload_limit: env::var("IMAGE_CACHE_PRELOAD_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PRELOAD_LIMIT),
        }
    }
}

/// Default memory budget: 10 MiB.
pub const DEFAULT_CAPACITY_BYTES: usize = 10 * 1024 * 1024;

/// Default number of URLs warmed up per preload call.
pub const DEFAULT_PRELOAD_LIMIT: usize = 5;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: DEFAULT_CAPACITY_BYTES,
            preload_limit: DEFAULT_PRELOAD_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity_bytes, 10 * 1024 * 1024);
        assert_eq!(config.preload_limit, 5);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("IMAGE_CACHE_CAPACITY_BYTES");
        env::remove_var("IMAGE_CACHE_PRELOAD_LIMIT");

        let config = CacheConfig::from_env();
        assert_eq!(config.capacity_bytes, DEFAULT_CAPACITY_BYTES);
        assert_eq!(config.preload_limit, DEFAULT_PRELOAD_LIMIT);
    }
}
