//! statcache - Bounded TTL metadata cache for object-store filesystems
//!
//! Amortizes repeated `info()` lookups of the same path across a fixed
//! validity window, with capacity-bounded FIFO eviction and lazy expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fs;
pub mod models;

pub use api::AppState;
pub use cache::{CacheStore, TtlCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use fs::{FileInfo, MetadataBackend, MetadataFs};
