//! Background Tasks Module
//!
//! Contains the fire-and-forget tasks the cache hands off to the tokio
//! runtime.
//!
//! # Tasks
//! - Preload: warms the loader's caches for upcoming URLs
//! - Disk purge: empties the loader's on-disk cache after a clear

mod preload;
mod purge;

pub use preload::spawn_preload_tasks;
pub use purge::spawn_disk_purge_task;
