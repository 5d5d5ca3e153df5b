//! Cache Module
//!
//! Bounded, time-expiring metadata cache with lazy expiry and FIFO eviction.

mod clock;
mod entry;
mod queue;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use entry::CacheEntry;
pub use queue::ExpiryQueue;
pub use shared::TtlCache;
pub use stats::CacheStats;
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// Default maximum number of live entries
pub const DEFAULT_CAPACITY: usize = 128;

/// Default validity window in seconds
pub const DEFAULT_VALIDITY_SECS: u64 = 2;

/// Longest accepted validity window (100 years)
pub const MAX_VALIDITY: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);
