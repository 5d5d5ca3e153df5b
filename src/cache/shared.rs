//! Shared Cache Module
//!
//! Thread-safe handle around [`CacheStore`]. A single mutex guards the map and
//! the expiry queue together, and every operation holds it for its whole
//! duration.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{CacheStats, CacheStore, Clock, MonotonicClock};
use crate::error::Result;

// == TTL Cache ==
/// Lock-guarded bounded TTL cache, safe to share behind an `Arc`.
#[derive(Debug)]
pub struct TtlCache<V, C = MonotonicClock> {
    store: Mutex<CacheStore<V, C>>,
}

impl<V> TtlCache<V, MonotonicClock> {
    /// Creates a cache backed by the monotonic system clock.
    pub fn new(capacity: usize, validity: Duration) -> Result<Self> {
        Ok(Self::from_store(CacheStore::new(capacity, validity)?))
    }
}

impl<V, C: Clock> TtlCache<V, C> {
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(capacity: usize, validity: Duration, clock: C) -> Result<Self> {
        Ok(Self::from_store(CacheStore::with_clock(capacity, validity, clock)?))
    }

    /// Wraps an already built store.
    pub fn from_store(store: CacheStore<V, C>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Returns the live value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.lock().get(key)
    }

    /// Stores `value` under `key`.
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.lock().put(key, value);
    }

    /// Drops the entry for `key`; a no-op when absent.
    pub fn invalidate(&self, key: &str) {
        self.lock().invalidate(key);
    }

    /// Snapshot of the statistics taken under the lock.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Runs `f` against the store while holding the lock.
    pub fn with_store<R>(&self, f: impl FnOnce(&CacheStore<V, C>) -> R) -> R {
        f(&self.lock())
    }

    // Store operations never panic midway, so a poisoned lock still guards
    // a consistent store.
    fn lock(&self) -> MutexGuard<'_, CacheStore<V, C>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
