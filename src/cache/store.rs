//! Bitmap Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking and
//! byte-budget eviction.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::cache::{Bitmap, CacheEntry, CacheStats, LruTracker};

// == Bitmap Store ==
/// Byte-bounded bitmap storage with least-recently-used eviction.
///
/// The store holds decoded bitmaps keyed by URL, keeps the summed byte size
/// of all entries at or below `capacity_bytes`, and frees the coldest entries
/// first when an insertion pushes usage over the budget. The single exception
/// is an entry that alone exceeds the budget: it is admitted (everything else
/// is evicted) rather than rejected.
#[derive(Debug)]
pub struct BitmapStore {
    /// URL to entry storage
    entries: HashMap<String, CacheEntry>,
    /// Recency ordering for eviction
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Memory budget in bytes
    capacity_bytes: usize,
    /// Summed byte size of current entries
    used_bytes: usize,
}

impl BitmapStore {
    // == Constructor ==
    /// Creates a new BitmapStore with the given memory budget.
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity_bytes,
            used_bytes: 0,
        }
    }

    // == Get ==
    /// Looks up a bitmap by URL.
    ///
    /// On hit the entry becomes most recently used and a shared handle to the
    /// bitmap is returned. A miss has no side effect beyond the miss counter;
    /// absence is a normal outcome, not a failure.
    pub fn get(&mut self, url: &str) -> Option<Arc<Bitmap>> {
        if let Some(entry) = self.entries.get(url) {
            let bitmap = Arc::clone(&entry.bitmap);
            self.stats.record_hit();
            self.lru.touch(url);
            Some(bitmap)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Put ==
    /// Inserts a bitmap under `url` unless an entry for it already exists.
    ///
    /// Returns whether an insertion happened. A put for a present key is a
    /// complete no-op: stored value, byte accounting, and recency order are
    /// all left untouched. After an insertion, coldest entries are evicted
    /// until usage fits the budget again or only the new entry remains.
    pub fn put(&mut self, url: &str, bitmap: Bitmap) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }

        let entry = CacheEntry::new(bitmap);
        self.used_bytes += entry.size_bytes;
        self.entries.insert(url.to_string(), entry);
        self.lru.touch(url);
        self.stats.record_insertion();

        self.evict_to_fit(url);

        debug_assert_eq!(
            self.used_bytes,
            self.entries.values().map(|e| e.size_bytes).sum::<usize>()
        );

        true
    }

    // == Evict To Fit ==
    /// Frees coldest entries until usage fits the budget.
    ///
    /// The just-inserted `newest` URL is never evicted here: an entry larger
    /// than the whole budget ends up alone in the cache, still over budget.
    fn evict_to_fit(&mut self, newest: &str) {
        while self.used_bytes > self.capacity_bytes {
            let victim = match self.lru.coldest() {
                Some(coldest) if coldest != newest => coldest.clone(),
                _ => break,
            };
            self.evict(&victim);
        }
    }

    // == Evict ==
    /// Removes a single entry, updating accounting and the eviction counter.
    fn evict(&mut self, url: &str) {
        if let Some(entry) = self.entries.remove(url) {
            self.used_bytes -= entry.size_bytes;
            self.lru.forget(url);
            self.stats.record_eviction();
            debug!(url, size_bytes = entry.size_bytes, "evicted bitmap");
        }
    }

    // == Evict All ==
    /// Removes every entry and resets byte usage to zero.
    pub fn evict_all(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.used_bytes = 0;
        if dropped > 0 {
            debug!(dropped, "memory cache emptied");
        }
    }

    // == Stats ==
    /// Returns current cache statistics with a fresh usage snapshot.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_usage(self.entries.len(), self.used_bytes, self.capacity_bytes);
        stats
    }

    // == Accessors ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks for an entry without touching recency or counters.
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Returns the summed byte size of current entries.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Returns the configured memory budget.
    pub fn capacity_bytes(&self) -> usize {
        self.capacity_bytes
    }
}
