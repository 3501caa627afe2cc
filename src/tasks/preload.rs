//! Preload Tasks
//!
//! Fire-and-forget warm-up of the image loader's caches ahead of scroll
//! position. Each URL gets its own task; outcomes are discarded.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::loader::ImageLoader;

/// Spawns one fetch-and-decode task per URL, up to `limit` URLs.
///
/// The tasks run concurrently with the caller and with each other, with no
/// ordering guarantee. Fetched bitmaps and fetch failures are both discarded:
/// only the loader's own cache benefits from the warm-up. Failures are never
/// retried.
///
/// Returns the JoinHandles of the spawned tasks. Callers normally drop them;
/// tests can await them to observe completion.
pub fn spawn_preload_tasks(
    loader: Arc<dyn ImageLoader>,
    urls: Vec<String>,
    limit: usize,
) -> Vec<JoinHandle<()>> {
    urls.into_iter()
        .take(limit)
        .map(|url| {
            let loader = Arc::clone(&loader);
            tokio::spawn(async move {
                match loader.fetch_and_decode(&url).await {
                    Ok(_) => debug!(url = %url, "preload warmed loader cache"),
                    Err(err) => debug!(url = %url, error = %err, "preload fetch discarded"),
                }
            })
        })
        .collect()
}
