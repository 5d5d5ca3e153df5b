//! Response DTOs for the metadata service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for touch and delete operations
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    /// Success message
    pub message: String,
    /// The path that was changed
    pub path: String,
}

impl MutationResponse {
    /// Creates a new MutationResponse
    pub fn new(action: &str, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            message: format!("'{}' {} successfully", path, action),
            path,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Whether the metadata cache is active
    pub enabled: bool,
    /// Cache counters, absent when caching is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStats>,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(cache: Option<CacheStats>) -> Self {
        Self {
            enabled: cache.is_some(),
            hit_rate: cache.as_ref().map_or(0.0, CacheStats::hit_rate),
            cache,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
