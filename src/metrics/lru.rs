//! Metrics for the LRU engine.

use super::{CacheMetrics, CoreCacheMetrics};

/// Metrics collected by [`LruCache`](crate::lru::LruCache).
#[derive(Debug, Default, Clone, Copy)]
pub struct LruCacheMetrics {
    core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    pub(crate) fn record_hit(&mut self) {
        self.core.record_hit();
    }

    pub(crate) fn record_miss(&mut self) {
        self.core.record_miss();
    }

    pub(crate) fn record_eviction(&mut self) {
        self.core.record_eviction();
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn requests(&self) -> u64 {
        self.core.requests
    }

    fn hits(&self) -> u64 {
        self.core.hits
    }

    fn evictions(&self) -> u64 {
        self.core.evictions
    }
}
