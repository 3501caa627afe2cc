//! Cache Module
//!
//! Provides in-memory bitmap caching bounded by a byte budget, with
//! least-recently-used eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{Bitmap, CacheEntry};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::BitmapStore;
