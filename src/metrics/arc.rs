//! Metrics for the ARC engine.

use super::{CacheMetrics, CoreCacheMetrics};

/// Metrics collected by [`ArcCache`](crate::arc::ArcCache).
#[derive(Debug, Default, Clone, Copy)]
pub struct ArcCacheMetrics {
    core: CoreCacheMetrics,
    /// Number of ghost-list hits that triggered a capacity rebalance.
    pub ghost_hits: u64,
    /// Number of entries promoted from the recency side to the frequency side.
    pub promotions: u64,
}

impl ArcCacheMetrics {
    pub(crate) fn record_hit(&mut self) {
        self.core.record_hit();
    }

    pub(crate) fn record_miss(&mut self) {
        self.core.record_miss();
    }

    pub(crate) fn record_eviction(&mut self) {
        self.core.record_eviction();
    }

    pub(crate) fn record_ghost_hit(&mut self) {
        self.ghost_hits += 1;
    }

    pub(crate) fn record_promotion(&mut self) {
        self.promotions += 1;
    }
}

impl CacheMetrics for ArcCacheMetrics {
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
