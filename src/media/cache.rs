// SPDX-License-Identifier: MPL-2.0
//! Decoded slide images, keyed by location.
//!
//! # Design
//!
//! - **LRU eviction**: least recently requested images are evicted first
//! - **Entry-bounded**: capacity comes from `[viewer] image_cache_entries`
//! - **Failures are remembered**: a location that failed to load is not
//!   requested again during the session
//! - **Deduplicated**: a location already loading is not requested twice

use crate::catalog::Location;
use crate::config::DEFAULT_IMAGE_CACHE_ENTRIES;
use crate::error::Error;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Load state of a single image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(ImageData),
    Failed { location: Location, reason: String },
}

impl ImageState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageState::Loading)
    }
}

pub struct ImageCache {
    entries: LruCache<Location, ImageState>,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .finish()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_ENTRIES)
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current state of `location` without touching the LRU order.
    #[must_use]
    pub fn state(&self, location: &Location) -> Option<&ImageState> {
        self.entries.peek(location)
    }

    /// Marks `location` as loading if nothing is known about it yet.
    ///
    /// Returns `true` when the caller should start a load. Known locations
    /// (loading, ready or failed) are only promoted in the LRU order.
    pub fn request(&mut self, location: &Location) -> bool {
        if self.entries.get(location).is_some() {
            return false;
        }
        self.entries.put(location.clone(), ImageState::Loading);
        true
    }

    /// Stores the outcome of a load started by [`request`](Self::request).
    ///
    /// Results for locations evicted while loading are dropped.
    pub fn complete(&mut self, location: &Location, result: Result<ImageData, Error>) {
        let Some(entry) = self.entries.peek_mut(location) else {
            tracing::debug!(%location, "dropping image for evicted entry");
            return;
        };

        *entry = match result {
            Ok(image) => ImageState::Ready(image),
            Err(err) => {
                tracing::warn!(%location, error = %err, "image failed to load");
                ImageState::Failed {
                    location: location.clone(),
                    reason: err.to_string(),
                }
            }
        };
    }
}
