//! Configuration for the hash-sharded wrapper.

/// Configuration for a [`ShardedCache`](crate::shard::ShardedCache).
///
/// `shard_count <= 0` auto-selects the host's available parallelism, mirroring
/// how the default segment count is chosen for the crate's lock-striped
/// concurrent caches.
#[derive(Debug, Clone, Copy)]
pub struct ShardCacheConfig {
    /// Total capacity across all shards. Each shard gets `ceil(total / shards)`,
    /// so the realized total may exceed `total_capacity` by up to `shards - 1`.
    pub total_capacity: usize,
    /// Number of independent shards. `<= 0` means auto-select.
    pub shard_count: i64,
}

impl ShardCacheConfig {
    /// Creates a new configuration.
    pub fn new(total_capacity: usize, shard_count: i64) -> Self {
        Self {
            total_capacity,
            shard_count,
        }
    }

    /// Resolves `shard_count` to a concrete, non-zero shard count.
    pub(crate) fn resolve_shard_count(&self) -> usize {
        if self.shard_count <= 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            self.shard_count as usize
        }
    }

    /// The per-shard capacity each shard should be built with:
    /// `ceil(total_capacity / resolved_shard_count)`.
    pub(crate) fn per_shard_capacity(&self) -> usize {
        let shard_count = self.resolve_shard_count().max(1);
        self.total_capacity.div_ceil(shard_count)
    }
}
