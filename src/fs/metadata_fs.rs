//! Metadata Filesystem Module
//!
//! Cache-through `info` lookups with invalidation on mutation.

use tracing::{debug, warn};

use crate::cache::{CacheStats, Clock, MonotonicClock, TtlCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::fs::{FileInfo, MetadataBackend};

// == Metadata Fs ==
/// Metadata path of a filesystem adapter.
///
/// Owns its cache; when caching is disabled every lookup goes straight to the
/// backend. Only positive results are cached.
#[derive(Debug)]
pub struct MetadataFs<B, C = MonotonicClock> {
    backend: B,
    cache: Option<TtlCache<FileInfo, C>>,
}

impl<B: MetadataBackend> MetadataFs<B, MonotonicClock> {
    /// Creates the adapter, building a cache only if the configured validity
    /// window is non-zero.
    pub fn new(backend: B, config: &Config) -> Result<Self> {
        config.validate()?;
        let cache = if config.caching_enabled() {
            Some(TtlCache::new(config.cache_capacity, config.cache_validity())?)
        } else {
            None
        };
        Ok(Self::with_cache(backend, cache))
    }
}

impl<B: MetadataBackend, C: Clock> MetadataFs<B, C> {
    /// Creates the adapter around an explicit cache, or none.
    pub fn with_cache(backend: B, cache: Option<TtlCache<FileInfo, C>>) -> Self {
        Self { backend, cache }
    }

    // == Info ==
    /// Details of the entry at `path`.
    ///
    /// Backend errors propagate and nothing is cached for them.
    pub fn info(&self, path: &str) -> Result<FileInfo> {
        if let Some(cache) = &self.cache {
            if let Some(info) = cache.get(path) {
                debug!(path, "info served from cache");
                return Ok(info);
            }
        }

        let info = self
            .backend
            .stat(path)?
            .ok_or_else(|| CacheError::NotFound(path.to_string()))?;

        if let Some(cache) = &self.cache {
            cache.put(path, info.clone());
        }
        Ok(info)
    }

    /// Is this entry file-like?
    pub fn is_file(&self, path: &str) -> bool {
        self.kind_matches(path, FileInfo::is_file)
    }

    /// Is this entry directory-like?
    pub fn is_dir(&self, path: &str) -> bool {
        self.kind_matches(path, FileInfo::is_dir)
    }

    fn kind_matches(&self, path: &str, check: fn(&FileInfo) -> bool) -> bool {
        match self.info(path) {
            Ok(info) => check(&info),
            Err(CacheError::NotFound(_)) => false,
            Err(e) => {
                warn!(path, error = %e, "metadata lookup failed");
                false
            }
        }
    }

    // == Mutations ==
    /// Deletes the object at `path` and drops its cached metadata.
    pub fn rm(&self, path: &str) -> Result<()> {
        self.backend.remove(path)?;
        self.invalidate(path);
        Ok(())
    }

    /// Creates or refreshes the object at `path` and drops its cached metadata.
    pub fn touch(&self, path: &str) -> Result<()> {
        self.backend.touch(path)?;
        self.invalidate(path);
        Ok(())
    }

    /// Drops cached metadata for `path` after an out-of-band mutation.
    pub fn invalidate(&self, path: &str) {
        if let Some(cache) = &self.cache {
            cache.invalidate(path);
        }
    }

    // == Accessors ==
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn caching_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Cache statistics, `None` when caching is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(TtlCache::stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::fs::MemoryBackend;
    use std::time::Duration;

    fn cached_fs(validity_secs: u64) -> (MetadataFs<MemoryBackend, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let cache =
            TtlCache::with_clock(128, Duration::from_secs(validity_secs), clock.clone()).unwrap();
        (MetadataFs::with_cache(MemoryBackend::new(), Some(cache)), clock)
    }

    struct FailingBackend;

    impl MetadataBackend for FailingBackend {
        fn stat(&self, path: &str) -> Result<Option<FileInfo>> {
            Err(CacheError::Backend(format!("500 received while accessing {}", path)))
        }

        fn remove(&self, _path: &str) -> Result<()> {
            Err(CacheError::Backend("remove failed".to_string()))
        }

        fn touch(&self, _path: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_info_is_served_from_cache() {
        let (fs, _clock) = cached_fs(2);
        fs.backend().put_object("/bucket/a", 10, None).unwrap();

        assert_eq!(fs.info("/bucket/a").unwrap().size, 10);
        assert_eq!(fs.info("/bucket/a").unwrap().size, 10);
        assert_eq!(fs.backend().stat_calls(), 1);

        let stats = fs.cache_stats().unwrap();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_info_refetched_after_validity() {
        let (fs, clock) = cached_fs(2);
        fs.backend().put_object("/bucket/a", 10, None).unwrap();
        fs.info("/bucket/a").unwrap();

        clock.advance(Duration::from_secs(2));
        fs.info("/bucket/a").unwrap();

        assert_eq!(fs.backend().stat_calls(), 2);
    }

    #[test]
    fn test_cached_info_can_be_stale_within_window() {
        let (fs, _clock) = cached_fs(2);
        fs.backend().put_object("/bucket/a", 10, None).unwrap();
        fs.info("/bucket/a").unwrap();

        // mutation that bypasses the adapter
        fs.backend().put_object("/bucket/a", 99, None).unwrap();
        assert_eq!(fs.info("/bucket/a").unwrap().size, 10);

        fs.invalidate("/bucket/a");
        assert_eq!(fs.info("/bucket/a").unwrap().size, 99);
    }

    #[test]
    fn test_missing_path_is_not_cached() {
        let (fs, _clock) = cached_fs(2);

        assert!(matches!(fs.info("/bucket/x"), Err(CacheError::NotFound(_))));
        fs.backend().put_object("/bucket/x", 1, None).unwrap();
        assert!(fs.info("/bucket/x").is_ok());
    }

    #[test]
    fn test_rm_invalidates() {
        let (fs, _clock) = cached_fs(2);
        fs.backend().put_object("/bucket/a", 10, None).unwrap();
        assert!(fs.is_file("/bucket/a"));

        fs.rm("/bucket/a").unwrap();

        assert!(!fs.is_file("/bucket/a"));
        assert!(matches!(fs.info("/bucket/a"), Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_touch_invalidates() {
        let (fs, _clock) = cached_fs(2);
        fs.touch("/bucket/t").unwrap();
        let before = fs.info("/bucket/t").unwrap();

        fs.touch("/bucket/t").unwrap();
        let after = fs.info("/bucket/t").unwrap();

        assert_eq!(fs.backend().stat_calls(), 2);
        assert!(after.mtime >= before.mtime);
    }

    #[test]
    fn test_is_dir() {
        let (fs, _clock) = cached_fs(2);
        fs.backend().put_object("/bucket/logs/day1", 1, None).unwrap();

        assert!(fs.is_dir("/bucket/logs"));
        assert!(!fs.is_file("/bucket/logs"));
        assert!(!fs.is_dir("/bucket/logs/day1"));
        assert!(!fs.is_dir("/bucket/nope"));
    }

    #[test]
    fn test_zero_validity_disables_cache() {
        let config = Config {
            cache_validity_secs: 0,
            ..Config::default()
        };
        let fs = MetadataFs::new(MemoryBackend::new(), &config).unwrap();
        fs.backend().put_object("/bucket/a", 1, None).unwrap();

        fs.info("/bucket/a").unwrap();
        fs.info("/bucket/a").unwrap();

        assert!(!fs.caching_enabled());
        assert!(fs.cache_stats().is_none());
        assert_eq!(fs.backend().stat_calls(), 2);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = Config {
            cache_capacity: 0,
            ..Config::default()
        };
        let result = MetadataFs::new(MemoryBackend::new(), &config);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_validity_rejected() {
        let config = Config {
            cache_validity_secs: u64::MAX,
            ..Config::default()
        };
        let result = MetadataFs::new(MemoryBackend::new(), &config);
        assert!(matches!(result, Err(CacheError::InvalidConfig(_))));
    }

    #[test]
    fn test_backend_errors_propagate() {
        let fs: MetadataFs<FailingBackend> =
            MetadataFs::new(FailingBackend, &Config::default()).unwrap();

        assert!(matches!(fs.info("/bucket/a"), Err(CacheError::Backend(_))));
        assert!(!fs.is_file("/bucket/a"));
        assert!(fs.rm("/bucket/a").is_err());
        assert_eq!(fs.cache_stats().unwrap().total_entries, 0);
    }
}
