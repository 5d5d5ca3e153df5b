//! Expiry Queue Module
//!
//! Insertion-ordered record of every put, used to drive expiry and eviction.

use std::collections::VecDeque;
use std::time::Instant;

// == Expiry Queue ==
/// Append-only (expiry, key) log in insertion order.
///
/// - Front = oldest insertion
/// - Back = newest insertion
///
/// A key appears once per put, so stale markers for overwritten or
/// invalidated keys are expected and are skipped by the store during GC.
#[derive(Debug, Default)]
pub struct ExpiryQueue {
    order: VecDeque<(Instant, String)>,
}

impl ExpiryQueue {
    // == Constructor ==
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records an insertion at the back.
    pub fn push(&mut self, expiry: Instant, key: String) {
        self.order.push_back((expiry, key));
    }

    // == Peek Oldest ==
    /// Returns the expiry of the oldest marker without removing it.
    pub fn peek_expiry(&self) -> Option<Instant> {
        self.order.front().map(|(expiry, _)| *expiry)
    }

    // == Pop Oldest ==
    /// Removes and returns the oldest marker.
    pub fn pop_oldest(&mut self) -> Option<(Instant, String)> {
        self.order.pop_front()
    }

    // == Length ==
    /// Returns the number of markers, stale ones included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Iterate ==
    /// Iterates markers from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &(Instant, String)> {
        self.order.iter()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_queue_new() {
        let queue = ExpiryQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek_expiry(), None);
    }

    #[test]
    fn test_queue_keeps_insertion_order() {
        let mut queue = ExpiryQueue::new();
        let t0 = Instant::now();

        queue.push(t0, "a".to_string());
        queue.push(t0 + Duration::from_secs(1), "b".to_string());
        queue.push(t0 + Duration::from_secs(2), "c".to_string());

        assert_eq!(queue.peek_expiry(), Some(t0));
        assert_eq!(queue.pop_oldest(), Some((t0, "a".to_string())));
        assert_eq!(queue.pop_oldest().map(|(_, k)| k), Some("b".to_string()));
        assert_eq!(queue.pop_oldest().map(|(_, k)| k), Some("c".to_string()));
        assert_eq!(queue.pop_oldest(), None);
    }

    #[test]
    fn test_queue_records_every_push_of_same_key() {
        let mut queue = ExpiryQueue::new();
        let t0 = Instant::now();

        queue.push(t0, "k3".to_string());
        queue.push(t0, "k3".to_string());

        assert_eq!(queue.len(), 2);
        assert!(queue.iter().all(|(_, k)| k == "k3"));
    }

    #[test]
    fn test_queue_iter_oldest_first() {
        let mut queue = ExpiryQueue::new();
        let t0 = Instant::now();

        queue.push(t0, "x".to_string());
        queue.push(t0, "y".to_string());

        let keys: Vec<&str> = queue.iter().map(|(_, k)| k.as_str()).collect();
        assert_eq!(keys, vec!["x", "y"]);
    }
}
