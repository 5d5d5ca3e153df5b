//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with an insertion-ordered
//! expiry queue. Expiry is lazy: nothing runs in the background, stale
//! entries are reclaimed by the `put` and `get` calls that notice them.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, ExpiryQueue, MonotonicClock, MAX_VALIDITY};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded TTL storage with FIFO capacity eviction.
///
/// Not synchronized; wrap it in [`TtlCache`](crate::cache::TtlCache) to share
/// it between threads.
#[derive(Debug)]
pub struct CacheStore<V, C = MonotonicClock> {
    /// Authoritative current value per key
    live: HashMap<String, CacheEntry<V>>,
    /// One (expiry, key) marker per put, oldest first
    queue: ExpiryQueue,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of live entries before GC evicts
    capacity: usize,
    /// Validity window added to "now" on every put
    validity: Duration,
    /// Monotonic time source
    clock: C,
}

impl<V> CacheStore<V, MonotonicClock> {
    // == Constructor ==
    /// Creates a new CacheStore with the specified capacity and validity window.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of live entries, must be positive
    /// * `validity` - How long an entry stays valid after its put
    pub fn new(capacity: usize, validity: Duration) -> Result<Self> {
        Self::with_clock(capacity, validity, MonotonicClock)
    }
}

impl<V, C: Clock> CacheStore<V, C> {
    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(capacity: usize, validity: Duration, clock: C) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "cache capacity must be positive".to_string(),
            ));
        }
        if validity > MAX_VALIDITY {
            return Err(CacheError::InvalidConfig(format!(
                "cache validity must not exceed {}s",
                MAX_VALIDITY.as_secs()
            )));
        }

        Ok(Self {
            live: HashMap::new(),
            queue: ExpiryQueue::new(),
            stats: CacheStats::new(),
            capacity,
            validity,
            clock,
        })
    }

    // == Put ==
    /// Stores a value under `key`, superseding any previous value.
    ///
    /// Every put appends a fresh expiry marker, even on overwrite. If the
    /// store grows past capacity, GC runs anchored at the insertion time.
    pub fn put(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let now = self.clock.now();
        let entry = CacheEntry::new(value, now, self.validity);

        self.queue.push(entry.expiry, key.clone());
        self.live.insert(key, entry);

        if self.live.len() > self.capacity {
            self.gc(now);
        }
    }

    // == Get ==
    /// Retrieves the value for `key` if it is present and still valid.
    ///
    /// Finding an expired entry triggers GC, so the entry is gone once this
    /// returns.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let now = self.clock.now();
        let Some(entry) = self.live.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if !entry.is_expired_at(now) {
            self.stats.record_hit();
            return Some(entry.value.clone());
        }

        self.gc(now);
        self.stats.record_miss();
        None
    }

    // == Invalidate ==
    /// Drops the live entry for `key`, if any.
    ///
    /// Its queue markers are left behind and skipped by later GC passes.
    pub fn invalidate(&mut self, key: &str) {
        if self.live.remove(key).is_some() {
            self.stats.record_invalidation();
            debug!(key, "Invalidated cache entry");
        }
    }

    // == Garbage Collection ==
    /// Reclaims queue markers from the front while they are expired at
    /// `until` or the store is over capacity.
    ///
    /// A marker only removes its live entry when the expiries match, which
    /// keeps a newer put of the same key alive. Returns the number of markers
    /// dropped from the queue.
    fn gc(&mut self, until: Instant) -> usize {
        let mut scanned = 0;
        let mut reclaimed = 0;

        while let Some(expiry) = self.queue.peek_expiry() {
            let over_capacity = self.live.len() > self.capacity;
            if expiry > until && !over_capacity {
                break;
            }
            let Some((expiry, key)) = self.queue.pop_oldest() else {
                break;
            };
            scanned += 1;

            let current = self.live.get(&key).is_some_and(|entry| entry.expiry == expiry);
            if current {
                self.live.remove(&key);
                reclaimed += 1;
                if expiry <= until {
                    self.stats.record_expiration();
                } else {
                    self.stats.record_eviction();
                }
            }
        }

        if scanned > 0 {
            debug!(
                scanned,
                reclaimed,
                live = self.live.len(),
                "Cache GC pass complete"
            );
        }
        scanned
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_sizes(self.live.len(), self.queue.len());
        stats
    }

    // == Length ==
    /// Returns the number of live entries, expired-but-unreclaimed included.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns the number of expiry markers in the queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Read-only view of the expiry queue.
    pub fn queue(&self) -> &ExpiryQueue {
        &self.queue
    }

    /// True if `key` has a live entry, regardless of expiry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.live.contains_key(key)
    }

    /// Current expiry of the live entry for `key`.
    pub fn expiry_of(&self, key: &str) -> Option<Instant> {
        self.live.get(key).map(|entry| entry.expiry)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn validity(&self) -> Duration {
        self.validity
    }
}
