//! Cache Statistics Module
//!
//! Tracks lookup outcomes and the reasons entries leave the cache.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Live entries reclaimed because their validity window elapsed
    pub expirations: u64,
    /// Live entries reclaimed because the cache was over capacity
    pub evictions: u64,
    /// Live entries removed by an explicit invalidate
    pub invalidations: u64,
    /// Current number of live entries
    pub total_entries: usize,
    /// Current number of expiry markers, stale ones included
    pub queue_len: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Invalidation ==
    /// Increments the invalidation counter.
    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }

    // == Update Sizes ==
    /// Updates the live entry and queue marker counts.
    pub fn set_sizes(&mut self, total_entries: usize, queue_len: usize) {
        self.total_entries = total_entries;
        self.queue_len = queue_len;
    }
}
