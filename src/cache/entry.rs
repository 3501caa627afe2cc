//! Cache Entry Module
//!
//! Defines the bitmap payload and the structure for individual cache entries.

use std::sync::Arc;

// == Bitmap ==
/// A decoded image held in memory.
///
/// The cache treats the pixel data as opaque; only its byte size matters for
/// accounting. Pixel format and decoding are the loader's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Raw decoded pixel data
    pub data: Vec<u8>,
}

impl Bitmap {
    /// Creates a bitmap from decoded pixel data.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns the memory footprint of this bitmap in bytes.
    pub fn byte_size(&self) -> usize {
        self.data.len()
    }
}

// == Cache Entry ==
/// A single cached bitmap together with its recorded size.
///
/// The size is captured once at insertion so that accounting can never drift
/// from the stored payload, and eviction can subtract without re-measuring.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bitmap, shared with callers on hit
    pub bitmap: Arc<Bitmap>,
    /// Byte size recorded at insertion time
    pub size_bytes: usize,
}

impl CacheEntry {
    /// Creates a new cache entry, recording the bitmap's byte size.
    pub fn new(bitmap: Bitmap) -> Self {
        let size_bytes = bitmap.byte_size();
        Self {
            bitmap: Arc::new(bitmap),
            size_bytes,
        }
    }
}
