//! Disk Purge Task
//!
//! Background task that asks the image loader to empty its on-disk cache.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::loader::ImageLoader;

/// Spawns a task that purges the loader's disk cache.
///
/// The caller does not wait for the purge and receives no completion signal.
/// Overlapping purges are allowed: purging an already-empty or partially
/// emptied cache is safe, so no mutual exclusion is needed. A failed purge is
/// discarded.
///
/// Returns the JoinHandle of the spawned task. Callers normally drop it;
/// tests can await it to observe completion.
pub fn spawn_disk_purge_task(loader: Arc<dyn ImageLoader>) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("disk cache purge started");
        match loader.purge_disk_cache().await {
            Ok(()) => debug!("disk cache purge finished"),
            Err(err) => debug!(error = %err, "disk cache purge discarded"),
        }
    })
}
