//! Integration Tests for the Bounded Image Cache
//!
//! Exercises the composed cache manager end to end against a scripted fake
//! image loader.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{RwLock, Semaphore};

use image_cache::{
    Bitmap, BoundedImageCache, CacheConfig, ImageLoader, LoaderError, Result as LoaderResult,
};

// == Helper Functions ==

fn bitmap(size: usize) -> Bitmap {
    Bitmap::new(1, 1, vec![0u8; size])
}

fn config(capacity_bytes: usize, preload_limit: usize) -> CacheConfig {
    CacheConfig {
        capacity_bytes,
        preload_limit,
    }
}

/// Scripted loader that records every call and can gate or fail on demand.
#[derive(Default)]
struct ScriptedLoader {
    fetched: Mutex<Vec<String>>,
    fail_fetches: bool,
    memory_releases: AtomicUsize,
    disk_purges: AtomicUsize,
    /// When set, purges block until a permit is added
    purge_gate: Option<Arc<Semaphore>>,
}

#[async_trait]
impl ImageLoader for ScriptedLoader {
    async fn fetch_and_decode(&self, url: &str) -> LoaderResult<Bitmap> {
        self.fetched.lock().unwrap().push(url.to_string());
        if self.fail_fetches {
            Err(LoaderError::Fetch(url.to_string()))
        } else {
            Ok(bitmap(16))
        }
    }

    fn release_memory_cache(&self) {
        self.memory_releases.fetch_add(1, Ordering::SeqCst);
    }

    async fn purge_disk_cache(&self) -> LoaderResult<()> {
        if let Some(gate) = &self.purge_gate {
            let _permit = gate.acquire().await.unwrap();
        }
        self.disk_purges.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(30)).await;
}

// == Preload Tests ==

#[tokio::test]
async fn test_preload_issues_exactly_limit_fetches() {
    let loader = Arc::new(ScriptedLoader::default());
    let cache = BoundedImageCache::with_loader(&config(1024, 5), loader.clone());

    let urls: Vec<String> = (1..=6).map(|i| format!("u{i}")).collect();
    cache.preload(urls);
    settle().await;

    let mut fetched = loader.fetched.lock().unwrap().clone();
    fetched.sort();
    assert_eq!(fetched, vec!["u1", "u2", "u3", "u4", "u5"], "u6 must never be fetched");
}

#[tokio::test]
async fn test_preload_failures_never_reach_the_caller() {
    let loader = Arc::new(ScriptedLoader {
        fail_fetches: true,
        ..ScriptedLoader::default()
    });
    let mut cache = BoundedImageCache::with_loader(&config(1024, 5), loader.clone());

    cache.preload((1..=5).map(|i| format!("u{i}")).collect());
    settle().await;

    // All five fetches failed; the cache is untouched and still usable
    assert_eq!(loader.fetched.lock().unwrap().len(), 5);
    assert!(cache.is_empty());
    assert!(cache.put("u1", bitmap(64)));
    assert!(cache.get("u1").is_some());
}

#[tokio::test]
async fn test_preload_leaves_memory_cache_unpopulated() {
    let loader = Arc::new(ScriptedLoader::default());
    let mut cache = BoundedImageCache::with_loader(&config(1024, 5), loader.clone());

    cache.preload(vec!["warm".to_string()]);
    settle().await;

    // The warm-up benefits only the loader's own cache
    assert_eq!(loader.fetched.lock().unwrap().len(), 1);
    assert!(cache.get("warm").is_none());
}

// == Clear Tests ==

#[tokio::test]
async fn test_clear_is_synchronous_while_purge_is_pending() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = Arc::new(ScriptedLoader {
        purge_gate: Some(gate.clone()),
        ..ScriptedLoader::default()
    });
    let mut cache = BoundedImageCache::with_loader(&config(1024, 5), loader.clone());

    cache.put("u1", bitmap(64));
    cache.put("u2", bitmap(64));

    cache.clear();

    // Memory is empty and the loader's memory cache released before the
    // disk purge has been allowed to finish
    assert!(cache.is_empty());
    assert_eq!(cache.stats().used_bytes, 0);
    assert_eq!(loader.memory_releases.load(Ordering::SeqCst), 1);
    assert_eq!(loader.disk_purges.load(Ordering::SeqCst), 0);

    // Release the purge and watch it complete
    gate.add_permits(1);
    settle().await;
    assert_eq!(loader.disk_purges.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_second_clear_while_purge_in_flight() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = Arc::new(ScriptedLoader {
        purge_gate: Some(gate.clone()),
        ..ScriptedLoader::default()
    });
    let mut cache = BoundedImageCache::with_loader(&config(1024, 5), loader.clone());

    cache.put("u1", bitmap(64));
    cache.clear();
    cache.clear();

    // Both purges may run concurrently; both complete once released
    gate.add_permits(2);
    settle().await;
    assert_eq!(loader.disk_purges.load(Ordering::SeqCst), 2);
    assert_eq!(loader.memory_releases.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_cache_usable_after_clear() {
    let loader = Arc::new(ScriptedLoader::default());
    let mut cache = BoundedImageCache::with_loader(&config(1024, 5), loader.clone());

    cache.put("u1", bitmap(64));
    cache.clear();
    settle().await;

    assert!(cache.put("u2", bitmap(64)));
    assert!(cache.get("u2").is_some());
    assert_eq!(cache.len(), 1);
}

// == Eviction Tests ==

#[tokio::test]
async fn test_lru_eviction_end_to_end() {
    let loader = Arc::new(ScriptedLoader::default());
    let mut cache = BoundedImageCache::with_loader(&config(10, 5), loader);

    cache.put("a", bitmap(4));
    cache.put("b", bitmap(4));
    cache.put("c", bitmap(4));

    // a was coldest and left to restore the bound
    assert!(!cache.contains("a"));
    assert_eq!(cache.stats().used_bytes, 8);

    // Touching b shifts eviction onto c
    assert!(cache.get("b").is_some());
    cache.put("d", bitmap(4));

    assert!(cache.contains("b"));
    assert!(cache.contains("d"));
    assert!(!cache.contains("c"));
    assert_eq!(cache.stats().used_bytes, 8);
}

// == Shared Access Tests ==

#[tokio::test]
async fn test_shared_access_through_rwlock() {
    let loader = Arc::new(ScriptedLoader::default());
    let cache = Arc::new(RwLock::new(BoundedImageCache::with_loader(
        &config(64 * 1024, 5),
        loader,
    )));

    let mut handles = Vec::new();
    for i in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            let url = format!("u{i}");
            {
                let mut guard = cache.write().await;
                guard.put(&url, bitmap(128));
            }
            let mut guard = cache.write().await;
            guard.get(&url).is_some()
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap());
    }

    let guard = cache.read().await;
    let stats = guard.stats();
    assert_eq!(stats.total_entries, 8);
    assert_eq!(stats.used_bytes, 8 * 128);
}

// == Stats Tests ==

#[tokio::test]
async fn test_stats_summary_matches_activity() {
    let loader = Arc::new(ScriptedLoader::default());
    let mut cache = BoundedImageCache::with_loader(&config(10 * 1024 * 1024, 5), loader);

    cache.put("u1", bitmap(8192));
    cache.get("u1");
    cache.get("missing");

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.insertions, 1);
    assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);

    let summary = cache.stats_summary();
    assert!(summary.contains("8192 B / 10485760 B"));
}
