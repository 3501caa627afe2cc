//! Image Loader Contract
//!
//! Defines the trait through which the cache talks to the external
//! image-loading subsystem (network fetch, decode, and its own disk cache).
//! The cache treats the loader as an opaque collaborator: it never inspects
//! what the loader caches, and it never depends on loader calls succeeding.

use async_trait::async_trait;

use crate::cache::Bitmap;
use crate::error::Result;

// == Image Loader Trait ==
/// Contract with the external image-loading subsystem.
///
/// Implementations are expected to do their own network and disk I/O and to
/// maintain their own caches. All methods may be called concurrently.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Fetches the image at `url` and decodes it into a bitmap.
    ///
    /// Used by preload to warm the loader's caches; the returned bitmap is
    /// discarded by the caller.
    async fn fetch_and_decode(&self, url: &str) -> Result<Bitmap>;

    /// Releases the loader's own in-memory cache.
    fn release_memory_cache(&self);

    /// Purges the loader's on-disk cache.
    ///
    /// Invoked fire-and-forget: callers do not await completion and ignore
    /// the outcome. Must be safe to call while another purge is in flight.
    async fn purge_disk_cache(&self) -> Result<()>;
}
