//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions,
//! together with a snapshot of current memory usage.

use std::fmt;

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of entries evicted to stay within the memory budget
    pub evictions: u64,
    /// Number of entries actually inserted (no-op puts excluded)
    pub insertions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Summed byte size of current entries
    pub used_bytes: usize,
    /// Configured memory budget in bytes
    pub capacity_bytes: usize,
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

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Insertion ==
    /// Increments the insertion counter.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    // == Update Usage ==
    /// Updates the usage snapshot fields.
    pub fn set_usage(&mut self, total_entries: usize, used_bytes: usize, capacity_bytes: usize) {
        self.total_entries = total_entries;
        self.used_bytes = used_bytes;
        self.capacity_bytes = capacity_bytes;
    }
}

// == Display ==
/// Human-readable summary for diagnostic display, e.g.
/// `memory cache: 8192 B / 10485760 B (2 entries, hit rate 0.67)`.
impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "memory cache: {} B / {} B ({} entries, hit rate {:.2})",
            self.used_bytes,
            self.capacity_bytes,
            self.total_entries,
            self.hit_rate()
        )
    }
}
