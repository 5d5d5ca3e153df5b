//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute expiry.

use std::time::{Duration, Instant};

use crate::cache::MAX_VALIDITY;

// == Cache Entry ==
/// A cached value together with the instant it stops being valid.
///
/// The expiry is fixed at insertion. Re-inserting a key builds a new entry
/// rather than extending this one.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute monotonic expiry
    pub expiry: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry inserted at `now` that stays valid for `validity`.
    ///
    /// Windows longer than [`MAX_VALIDITY`] are clamped to it.
    pub fn new(value: V, now: Instant, validity: Duration) -> Self {
        let validity = validity.min(MAX_VALIDITY);
        let expiry = now
            .checked_add(validity)
            .unwrap_or_else(|| far_future(now, validity));
        Self { value, expiry }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired at `now`.
    ///
    /// Boundary condition: the entry is expired once `now` reaches the expiry,
    /// so a zero validity window yields an entry that is already expired.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expiry
    }
}

/// Latest instant reachable from `now` within `validity`.
fn far_future(now: Instant, mut validity: Duration) -> Instant {
    while !validity.is_zero() {
        validity /= 2;
        if let Some(expiry) = now.checked_add(validity) {
            return expiry;
        }
    }
    now
}
