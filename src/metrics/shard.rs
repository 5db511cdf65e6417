//! Aggregated metrics for the hash-sharded wrapper.

use super::CacheMetrics;

/// A snapshot of metrics summed across every shard of a
/// [`ShardedCache`](crate::shard::ShardedCache).
///
/// Unlike the per-engine metrics types, this is a plain owned value rather
/// than something read through a long-lived reference: producing it requires
/// locking every shard in turn, so it is computed on demand rather than kept
/// live.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShardCacheMetrics {
    /// Total `get` calls across every shard.
    pub requests: u64,
    /// `get` calls across every shard that were hits.
    pub hits: u64,
    /// Entries evicted across every shard.
    pub evictions: u64,
}

impl CacheMetrics for ShardCacheMetrics {
    fn requests(&self) -> u64 {
        self.requests
    }

    fn hits(&self) -> u64 {
        self.hits
    }

    fn evictions(&self) -> u64 {
        self.evictions
    }
}
