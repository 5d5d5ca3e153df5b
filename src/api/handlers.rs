//! API Handlers
//!
//! HTTP request handlers for each metadata service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::fs::{FileInfo, MemoryBackend, MetadataFs};
use crate::models::{HealthResponse, MutationResponse, PutObjectRequest, StatsResponse};

/// Application state shared across all handlers.
///
/// The adapter synchronizes its own cache, so it is shared behind a plain Arc.
#[derive(Clone)]
pub struct AppState {
    /// Cached metadata path over the in-memory object store
    pub fs: Arc<MetadataFs<MemoryBackend>>,
}

impl AppState {
    /// Creates a new AppState around the given adapter.
    pub fn new(fs: MetadataFs<MemoryBackend>) -> Self {
        Self { fs: Arc::new(fs) }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured cache capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fs = MetadataFs::new(MemoryBackend::new(), config)?;
        Ok(Self::new(fs))
    }
}

/// Turns a wildcard capture into the fully-qualified cache key.
fn to_key(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Handler for GET /info/*path
///
/// Returns the metadata of the entry at the path.
pub async fn info_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<FileInfo>> {
    let info = state.fs.info(&to_key(&path))?;
    Ok(Json(info))
}

/// Handler for PUT /objects/*path
///
/// Stores an object and drops any cached metadata for it.
pub async fn put_object_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    Json(req): Json<PutObjectRequest>,
) -> Result<Json<FileInfo>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let key = to_key(&path);
    let info = state.fs.backend().put_object(&key, req.size, req.mode)?;
    state.fs.invalidate(&key);

    Ok(Json(info))
}

/// Handler for POST /touch/*path
pub async fn touch_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<MutationResponse>> {
    let key = to_key(&path);
    state.fs.touch(&key)?;

    Ok(Json(MutationResponse::new("touched", key)))
}

/// Handler for DELETE /objects/*path
///
/// Deleting a missing object succeeds.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<MutationResponse>> {
    let key = to_key(&path);
    state.fs.rm(&key)?;

    Ok(Json(MutationResponse::new("deleted", key)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(state.fs.cache_stats()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
