//! Filesystem Metadata Module
//!
//! The adapter's `info()` path: a cache-through lookup in front of an
//! authoritative metadata backend.
//!
//! # Types
//! - [`FileInfo`] - Metadata record cached per path
//! - [`MetadataBackend`] - Authoritative source of metadata
//! - [`MetadataFs`] - Cached `info`/`rm`/`touch` over a backend
//! - [`MemoryBackend`] - In-memory object store backend

mod info;
mod memory;
mod metadata_fs;

pub use info::{EntryKind, FileInfo};
pub use memory::MemoryBackend;
pub use metadata_fs::MetadataFs;

use crate::error::Result;

// == Metadata Backend ==
/// Authoritative metadata source behind the cache.
///
/// Paths are fully-qualified strings; their structure is the backend's
/// business.
pub trait MetadataBackend: Send + Sync {
    /// Looks up the entry at `path`, `None` if nothing exists there.
    fn stat(&self, path: &str) -> Result<Option<FileInfo>>;

    /// Deletes the object at `path`. Missing objects are not an error.
    fn remove(&self, path: &str) -> Result<()>;

    /// Creates an empty object at `path`, or refreshes its mtime.
    fn touch(&self, path: &str) -> Result<()>;
}
