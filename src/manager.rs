//! Cache Manager Module
//!
//! Composes the in-memory bitmap store with the optional image-loading
//! collaborator, adding preload scheduling and coordinated cache clearing.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{Bitmap, BitmapStore, CacheStats};
use crate::config::CacheConfig;
use crate::loader::ImageLoader;
use crate::tasks::{spawn_disk_purge_task, spawn_preload_tasks};

// == Bounded Image Cache ==
/// A byte-bounded image cache coordinating with an external image loader.
///
/// Lookups and insertions are synchronous and never perform I/O. Preload and
/// the disk half of `clear` are handed off to the tokio runtime as
/// fire-and-forget tasks, so both require an ambient runtime when a loader is
/// installed.
///
/// The loader is optional: a cache constructed without one still serves
/// `get`/`put`/`clear`, and the loader-facing steps become no-ops. Callers
/// that share the cache across threads wrap it in `Arc<RwLock<_>>`.
pub struct BoundedImageCache {
    /// In-memory bitmap store
    store: BitmapStore,
    /// External image-loading collaborator, if installed
    loader: Option<Arc<dyn ImageLoader>>,
    /// Maximum number of URLs warmed up per preload call
    preload_limit: usize,
}

impl BoundedImageCache {
    // == Constructors ==
    /// Creates a cache from configuration, with no loader installed.
    pub fn new(config: &CacheConfig) -> Self {
        info!(
            capacity_bytes = config.capacity_bytes,
            preload_limit = config.preload_limit,
            "image cache initialized"
        );
        Self {
            store: BitmapStore::new(config.capacity_bytes),
            loader: None,
            preload_limit: config.preload_limit,
        }
    }

    /// Creates a cache from configuration with a loader installed.
    pub fn with_loader(config: &CacheConfig, loader: Arc<dyn ImageLoader>) -> Self {
        let mut cache = Self::new(config);
        cache.loader = Some(loader);
        cache
    }

    /// Installs or replaces the image-loading collaborator.
    pub fn set_loader(&mut self, loader: Arc<dyn ImageLoader>) {
        self.loader = Some(loader);
    }

    // == Get ==
    /// Looks up a bitmap, marking it most recently used on hit.
    pub fn get(&mut self, url: &str) -> Option<Arc<Bitmap>> {
        self.store.get(url)
    }

    // == Put ==
    /// Inserts a bitmap unless the URL is already cached.
    ///
    /// Returns whether an insertion happened. See [`BitmapStore::put`] for
    /// the eviction behavior.
    pub fn put(&mut self, url: &str, bitmap: Bitmap) -> bool {
        self.store.put(url, bitmap)
    }

    // == Preload ==
    /// Warms the loader's caches for the first `preload_limit` URLs.
    ///
    /// Fire-and-forget: fetched bitmaps and failures are discarded, nothing
    /// is inserted into this cache, and no completion signal is given. With
    /// no loader installed this is a no-op.
    pub fn preload(&self, urls: Vec<String>) {
        let Some(loader) = &self.loader else {
            debug!("preload skipped, no loader installed");
            return;
        };
        let spawned = spawn_preload_tasks(Arc::clone(loader), urls, self.preload_limit);
        debug!(count = spawned.len(), "preload tasks spawned");
    }

    // == Clear ==
    /// Empties the in-memory cache and asks the loader to do the same.
    ///
    /// The in-memory store is emptied synchronously before this returns. The
    /// loader's memory cache is released inline; its disk cache is purged by
    /// a spawned task that this call does not wait for. With no loader
    /// installed only the in-memory clear happens.
    pub fn clear(&mut self) {
        self.store.evict_all();

        let Some(loader) = &self.loader else {
            return;
        };
        loader.release_memory_cache();
        spawn_disk_purge_task(Arc::clone(loader));
        info!("cache cleared, disk purge scheduled");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    /// Returns the human-readable usage summary, for diagnostic display only.
    pub fn stats_summary(&self) -> String {
        self.stats().to_string()
    }

    // == Accessors ==
    /// Returns the current number of cached bitmaps.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Checks for a cached bitmap without touching recency or counters.
    pub fn contains(&self, url: &str) -> bool {
        self.store.contains(url)
    }
}
