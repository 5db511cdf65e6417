//! Metrics for the LFU engine.

use super::{CacheMetrics, CoreCacheMetrics};

/// Metrics collected by [`LfuCache`](crate::lfu::LfuCache).
#[derive(Debug, Default, Clone, Copy)]
pub struct LfuCacheMetrics {
    core: CoreCacheMetrics,
    /// Number of global aging passes performed so far.
    pub aging_passes: u64,
}

impl LfuCacheMetrics {
    pub(crate) fn record_hit(&mut self) {
        self.core.record_hit();
    }

    pub(crate) fn record_miss(&mut self) {
        self.core.record_miss();
    }

    pub(crate) fn record_eviction(&mut self) {
        self.core.record_eviction();
    }

    pub(crate) fn record_aging_pass(&mut self) {
        self.aging_passes += 1;
    }
}

impl CacheMetrics for LfuCacheMetrics {
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
