//! Hash-partitioned composition of independent engines.
//!
//! Generalizes the crate's lock-striping pattern to any [`CacheEngine`]
//! rather than duplicating a segmented wrapper per algorithm: `N` engines of
//! the same type, each behind its own lock, with keys routed to a shard by
//! `hash(key) % N`. Ordering (recency, frequency, admission) is only
//! meaningful *within* a shard; an item in one shard may be evicted while a
//! less-recently-used item sits untouched in another.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                        ShardedCache                             │
//! │                                                                  │
//! │   hash(key) % N  ──▶  shard selection                            │
//! │                                                                  │
//! │   ┌──────────┐   ┌──────────┐         ┌──────────┐               │
//! │   │ Mutex<E> │   │ Mutex<E> │   ...   │ Mutex<E> │               │
//! │   └──────────┘   └──────────┘         └──────────┘               │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use cache_rs::shard::ShardedCache;
//! use cache_rs::lru::LruCache;
//! use cache_rs::config::{LruCacheConfig, ShardCacheConfig};
//!
//! let cache: ShardedCache<&str, i32, LruCache<&str, i32>> =
//!     ShardedCache::new(ShardCacheConfig::new(100, 4), |_shard, capacity| {
//!         LruCache::new(LruCacheConfig::new(capacity))
//!     });
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Some(1));
//! ```

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::config::ShardCacheConfig;
use crate::engine::CacheEngine;
use crate::metrics::ShardCacheMetrics;

/// A hash-sharded wrapper around `shard_count` independent engines of type
/// `E`, each protected by its own lock.
pub struct ShardedCache<K, V, E> {
    shards: Vec<Mutex<E>>,
    hash_builder: RandomState,
    _marker: PhantomData<fn(K, V)>,
}

// SAFETY: every shard is reachable only through its own Mutex; no pointer
// owned by one engine is ever exposed outside that engine's lock.
unsafe impl<K: Send, V: Send, E: Send> Send for ShardedCache<K, V, E> {}
unsafe impl<K: Send, V: Send, E: Send> Sync for ShardedCache<K, V, E> {}

impl<K, V, E> ShardedCache<K, V, E>
where
    K: Hash + Eq,
    E: CacheEngine<K, V>,
{
    /// Builds a sharded cache from a [`ShardCacheConfig`], constructing each
    /// shard's engine with `make_shard(shard_index, per_shard_capacity)`.
    ///
    /// `per_shard_capacity` is `ceil(total_capacity / shard_count)`, so the
    /// realized total capacity may exceed `total_capacity` by up to
    /// `shard_count - 1`, per the wrapper's ceiling-rounding contract.
    pub fn new<F>(config: ShardCacheConfig, mut make_shard: F) -> Self
    where
        F: FnMut(usize, usize) -> E,
    {
        let shard_count = config.resolve_shard_count().max(1);
        let per_shard = config.per_shard_capacity();
        let shards = (0..shard_count)
            .map(|i| Mutex::new(make_shard(i, per_shard)))
            .collect();
        Self {
            shards,
            hash_builder: RandomState::new(),
            _marker: PhantomData,
        }
    }

    /// Number of independent shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    #[inline]
    fn shard_index(&self, key: &K) -> usize {
        (self.hash_builder.hash_one(key) as usize) % self.shards.len()
    }

    /// Routes `key` to its shard and inserts or updates it there.
    pub fn put(&self, key: K, value: V) {
        let idx = self.shard_index(&key);
        self.shards[idx].lock().put(key, value);
    }

    /// Routes `key` to its shard and looks it up there.
    pub fn get(&self, key: &K) -> Option<V> {
        let idx = self.shard_index(key);
        self.shards[idx].lock().get(key)
    }

    /// Routes `key` to its shard, copying its value into `out` and returning
    /// `true` on a hit. Equivalent to [`ShardedCache::get`], but avoids a
    /// clone at call sites that already own a slot to write into.
    pub fn get_into(&self, key: &K, out: &mut V) -> bool {
        let idx = self.shard_index(key);
        self.shards[idx].lock().get_into(key, out)
    }

    /// Returns `true` if `key` is live in its shard.
    pub fn contains(&self, key: &K) -> bool {
        let idx = self.shard_index(key);
        self.shards[idx].lock().contains(key)
    }

    /// Total live entries across all shards.
    ///
    /// Locks each shard sequentially, so the result may be stale the instant
    /// it's returned under concurrent writers.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().len()).sum()
    }

    /// Returns `true` if every shard holds no entries.
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.lock().is_empty())
    }

    /// Metrics summed across every shard.
    pub fn metrics(&self) -> ShardCacheMetrics {
        let mut aggregate = ShardCacheMetrics::default();
        for shard in &self.shards {
            let engine = shard.lock();
            let metrics = engine.metrics();
            aggregate.requests += metrics.requests();
            aggregate.hits += metrics.hits();
            aggregate.evictions += metrics.evictions();
        }
        aggregate
    }
}

impl<K, V, E> std::fmt::Debug for ShardedCache<K, V, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedCache")
            .field("shard_count", &self.shards.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LruCacheConfig;
    use crate::lru::LruCache;
    use crate::metrics::CacheMetrics;

    fn cache(total_capacity: usize, shards: i64) -> ShardedCache<&'static str, i32, LruCache<&'static str, i32>> {
        ShardedCache::new(ShardCacheConfig::new(total_capacity, shards), |_, capacity| {
            LruCache::new(LruCacheConfig::new(capacity))
        })
    }

    #[test]
    fn routes_and_retrieves_across_shards() {
        let cache = cache(16, 4);
        for (i, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            cache.put(*key, i as i32);
        }
        for (i, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            assert_eq!(cache.get(key), Some(i as i32));
        }
    }

    #[test]
    fn explicit_shard_count_is_honored() {
        let cache = cache(8, 3);
        assert_eq!(cache.shard_count(), 3);
    }

    #[test]
    fn auto_shard_count_is_at_least_one() {
        let cache: ShardedCache<&str, i32, LruCache<&str, i32>> = ShardedCache::new(
            ShardCacheConfig::new(8, 0),
            |_, capacity| LruCache::new(LruCacheConfig::new(capacity)),
        );
        assert!(cache.shard_count() >= 1);
    }

    #[test]
    fn per_shard_capacity_is_ceiling_divided() {
        // 16 total over 4 shards divides evenly; 17 over 4 must round up to 5
        // per shard rather than truncate to 4, per the ceiling contract.
        let mut seen_capacities = Vec::new();
        let _: ShardedCache<&str, i32, LruCache<&str, i32>> =
            ShardedCache::new(ShardCacheConfig::new(17, 4), |_, capacity| {
                seen_capacities.push(capacity);
                LruCache::new(LruCacheConfig::new(capacity))
            });
        assert_eq!(seen_capacities, vec![5, 5, 5, 5]);
    }

    #[test]
    fn metrics_aggregate_across_shards() {
        let cache = cache(16, 4);
        cache.put("a", 1);
        cache.put("a", 2);
        let _ = cache.get(&"a");
        let _ = cache.get(&"missing");
        let metrics = cache.metrics();
        assert_eq!(metrics.requests(), 2);
        assert_eq!(metrics.hits(), 1);
    }
}
