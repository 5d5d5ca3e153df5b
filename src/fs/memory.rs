//! Memory Backend Module
//!
//! In-memory object store used by the server binary and by tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::error::{CacheError, Result};
use crate::fs::{FileInfo, MetadataBackend};

// == Memory Backend ==
/// Flat object map keyed by full path.
///
/// A path is a file if an object is stored under it, and a directory if any
/// object is stored beneath `path/`.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    objects: RwLock<BTreeMap<String, FileInfo>>,
    stat_calls: AtomicU64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an object of `size` bytes, replacing any previous one.
    pub fn put_object(&self, path: &str, size: u64, mode: Option<u32>) -> Result<FileInfo> {
        validate_path(path)?;
        let mut info = FileInfo::file(path, size).with_mtime(Utc::now());
        info.mode = mode;
        self.write().insert(path.to_string(), info.clone());
        Ok(info)
    }

    /// Number of `stat` calls served so far.
    pub fn stat_calls(&self) -> u64 {
        self.stat_calls.load(Ordering::Relaxed)
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, FileInfo>> {
        self.objects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, FileInfo>> {
        self.objects.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MetadataBackend for MemoryBackend {
    fn stat(&self, path: &str) -> Result<Option<FileInfo>> {
        self.stat_calls.fetch_add(1, Ordering::Relaxed);
        validate_path(path)?;

        let objects = self.read();
        if let Some(info) = objects.get(path) {
            return Ok(Some(info.clone()));
        }

        let prefix = format!("{}/", path.trim_end_matches('/'));
        let has_children = objects
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix));
        Ok(has_children.then(|| FileInfo::directory(path)))
    }

    fn remove(&self, path: &str) -> Result<()> {
        validate_path(path)?;
        self.write().remove(path);
        Ok(())
    }

    fn touch(&self, path: &str) -> Result<()> {
        validate_path(path)?;
        let now = Utc::now();
        self.write()
            .entry(path.to_string())
            .and_modify(|info| info.mtime = Some(now))
            .or_insert_with(|| FileInfo::file(path, 0).with_mtime(now));
        Ok(())
    }
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() || path == "/" {
        return Err(CacheError::InvalidRequest(format!("bad path: {:?}", path)));
    }
    Ok(())
}
