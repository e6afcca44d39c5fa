// SPDX-License-Identifier: MPL-2.0
//! Image cache keyed by story image URI.
//!
//! Story images are requested once and then shared between the viewer, the
//! avatar rail and the recent grid. Each URI moves through
//! `Pending -> Ready | Failed`; a failed entry can be retried by requesting
//! it again.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used entries are evicted first
//! - **Pinning**: Pinned URIs (whatever is on screen or about to be) are
//!   never evicted; a cache full of pinned entries grows instead
//! - **Entry-bounded**: Capacity is a number of images, not bytes
//! - **In-flight tracking**: A pending URI is never requested twice

use crate::config::DEFAULT_IMAGE_CACHE_ENTRIES;
use crate::error::Error;
use crate::media::ImageData;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Load state of one image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Pending,
    Ready(Arc<ImageData>),
    Failed(Error),
}

impl ImageState {
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

pub struct ImageCache {
    entries: LruCache<String, ImageState>,
    pinned: HashSet<String>,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` images (zero falls back to
    /// the default capacity).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_IMAGE_CACHE_ENTRIES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pinned: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Marks `uri` as requested.
    ///
    /// Returns `true` when the caller should start a load: the URI is
    /// unknown or its previous load failed. Pending and ready entries are
    /// left alone.
    pub fn request(&mut self, uri: &str) -> bool {
        if uri.is_empty() {
            return false;
        }
        match self.entries.get(uri) {
            Some(ImageState::Pending | ImageState::Ready(_)) => {
                self.stats.hits += 1;
                false
            }
            Some(ImageState::Failed(_)) | None => {
                self.stats.misses += 1;
                self.put(uri.to_string(), ImageState::Pending);
                true
            }
        }
    }

    /// Replaces the set of URIs that must survive eviction.
    pub fn pin<I>(&mut self, uris: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.pinned = uris.into_iter().filter(|uri| !uri.is_empty()).collect();
    }

    /// Grows the cache to hold at least `capacity` images. Never shrinks.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if let Some(capacity) = NonZeroUsize::new(capacity) {
            if capacity > self.entries.cap() {
                log::debug!("Growing image cache to {capacity} entries");
                self.entries.resize(capacity);
            }
        }
    }

    /// Stores the outcome of a load started by [`request`](Self::request).
    pub fn complete(&mut self, uri: String, result: Result<ImageData, Error>) {
        let state = match result {
            Ok(data) => ImageState::Ready(Arc::new(data)),
            Err(err) => {
                log::warn!("Failed to load image {uri}: {err}");
                ImageState::Failed(err)
            }
        };
        self.put(uri, state);
    }

    fn put(&mut self, uri: String, state: ImageState) {
        let full = self.entries.len() >= self.entries.cap().get();
        if full && !self.entries.contains(uri.as_str()) {
            self.evict_one();
        }
        self.entries.put(uri, state);
    }

    /// Drops the least recently used unpinned entry, or makes room for one
    /// more when every entry is pinned.
    fn evict_one(&mut self) {
        let victim = self
            .entries
            .iter()
            .rev()
            .map(|(uri, _)| uri)
            .find(|uri| !self.pinned.contains(*uri))
            .cloned();
        match victim {
            Some(uri) => {
                self.entries.pop(uri.as_str());
                self.stats.evictions += 1;
            }
            None => {
                let capacity = self.entries.cap().saturating_add(1);
                self.entries.resize(capacity);
            }
        }
    }

    /// Looks up `uri` without updating LRU order.
    #[must_use]
    pub fn state(&self, uri: &str) -> Option<&ImageState> {
        self.entries.peek(uri)
    }

    /// Ready image for `uri`, if any.
    #[must_use]
    pub fn image(&self, uri: &str) -> Option<&ImageData> {
        self.state(uri).and_then(ImageState::image)
    }

    #[must_use]
    pub fn is_ready(&self, uri: &str) -> bool {
        self.image(uri).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_ENTRIES)
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("entries", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![0u8; 16])
    }

    #[test]
    fn first_request_starts_load_and_marks_pending() {
        let mut cache = ImageCache::default();
        assert!(cache.request("a.jpg"));
        assert!(cache.state("a.jpg").is_some_and(ImageState::is_pending));
    }

    #[test]
    fn pending_and_ready_entries_are_not_requested_again() {
        let mut cache = ImageCache::default();
        assert!(cache.request("a.jpg"));
        assert!(!cache.request("a.jpg"));

        cache.complete("a.jpg".to_string(), Ok(test_image()));
        assert!(cache.is_ready("a.jpg"));
        assert!(!cache.request("a.jpg"));
        assert_eq!(cache.stats().hits, 2);
    }

    #[test]
    fn failed_entry_can_be_retried() {
        let mut cache = ImageCache::default();
        cache.request("bad.jpg");
        cache.complete("bad.jpg".to_string(), Err(Error::Image("corrupt".into())));

        assert!(matches!(cache.state("bad.jpg"), Some(ImageState::Failed(_))));
        assert!(cache.request("bad.jpg"));
    }

    #[test]
    fn empty_uri_is_never_requested() {
        let mut cache = ImageCache::default();
        assert!(!cache.request(""));
        assert!(cache.is_empty());
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = ImageCache::new(2);
        cache.request("a");
        cache.request("b");
        cache.request("c");

        assert_eq!(cache.len(), 2);
        assert!(cache.state("a").is_none());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn pinned_entry_survives_eviction() {
        let mut cache = ImageCache::new(2);
        cache.request("story.jpg");
        cache.complete("story.jpg".to_string(), Ok(test_image()));
        cache.pin(["story.jpg".to_string()]);

        for uri in ["a", "b", "c", "d"] {
            cache.request(uri);
        }

        assert!(cache.is_ready("story.jpg"));
        assert_eq!(cache.len(), 2);
        assert!(cache.state("c").is_none());
        assert!(cache.state("d").is_some());
    }

    #[test]
    fn all_pinned_cache_grows_instead_of_evicting() {
        let mut cache = ImageCache::new(1);
        cache.request("a");
        cache.pin(["a".to_string()]);
        cache.request("b");

        assert_eq!(cache.len(), 2);
        assert!(cache.state("a").is_some());
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn pin_replaces_previous_set() {
        let mut cache = ImageCache::new(1);
        cache.request("a");
        cache.pin(["a".to_string()]);
        cache.pin(["b".to_string()]);
        cache.request("b");

        assert!(cache.state("a").is_none());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn ensure_capacity_only_grows() {
        let mut cache = ImageCache::new(4);
        cache.ensure_capacity(2);
        assert!(format!("{cache:?}").contains("capacity: 4"));
        cache.ensure_capacity(10);
        assert!(format!("{cache:?}").contains("capacity: 10"));
    }

    #[test]
    fn zero_capacity_uses_default() {
        let cache = ImageCache::new(0);
        assert!(format!("{cache:?}").contains(&DEFAULT_IMAGE_CACHE_ENTRIES.to_string()));
    }
}
