//! Recency Tracker Module
//!
//! Tracks access order over cached URLs for least-recently-used eviction.

use std::collections::VecDeque;

// == Recency Tracker ==
/// Access-order bookkeeping for eviction decisions.
///
/// URLs are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used (coldest, next eviction candidate)
#[derive(Debug, Default)]
pub struct LruTracker {
    /// URLs ordered by last access
    order: VecDeque<String>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a URL as most recently used.
    ///
    /// An already-tracked URL moves to the front; a new URL is added there.
    pub fn touch(&mut self, url: &str) {
        self.forget(url);
        self.order.push_front(url.to_string());
    }

    // == Forget ==
    /// Drops a URL from the ordering. No effect if it is not tracked.
    pub fn forget(&mut self, url: &str) {
        self.order.retain(|u| u != url);
    }

    // == Pop Coldest ==
    /// Removes and returns the least recently used URL, if any.
    pub fn pop_coldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Coldest ==
    /// Returns the least recently used URL without removing it.
    pub fn coldest(&self) -> Option<&String> {
        self.order.back()
    }

    // == Clear ==
    /// Drops all tracked URLs.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of tracked URLs.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a URL is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, url: &str) -> bool {
        self.order.iter().any(|u| u == url)
    }
}
