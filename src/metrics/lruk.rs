//! Metrics for the LRU-K admission wrapper.

use super::{CacheMetrics, CoreCacheMetrics};

/// Metrics collected by [`LruKCache`](crate::lruk::LruKCache).
#[derive(Debug, Default, Clone, Copy)]
pub struct LruKCacheMetrics {
    core: CoreCacheMetrics,
    /// Number of keys promoted from history into the main cache.
    pub admissions: u64,
}

impl LruKCacheMetrics {
    pub(crate) fn record_hit(&mut self) {
        self.core.record_hit();
    }

    pub(crate) fn record_miss(&mut self) {
        self.core.record_miss();
    }

    pub(crate) fn record_eviction(&mut self) {
        self.core.record_eviction();
    }

    pub(crate) fn record_admission(&mut self) {
        self.admissions += 1;
    }
}

impl CacheMetrics for LruKCacheMetrics {
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
