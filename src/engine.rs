//! Abstract interface shared by every eviction engine.
//!
//! [`CacheEngine`] lets callers write code generic over the eviction policy —
//! most usefully the [`shard`](crate::shard) wrapper, which partitions keys
//! across `N` independent engines of the same type without caring which
//! policy they implement. [`Cache`] is a concrete, non-generic handle over
//! any one of the five engines for callers who want to pick a policy at
//! runtime (e.g. from a configuration value) instead of at compile time.

use std::hash::Hash;

use crate::arc::ArcCache;
use crate::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use crate::lfu::LfuCache;
use crate::lru::LruCache;
use crate::lruk::LruKCache;
use crate::metrics::{ArcCacheMetrics, CacheMetrics, LfuCacheMetrics, LruCacheMetrics, LruKCacheMetrics};

/// Common operations every eviction engine supports.
///
/// `get` returns an owned clone rather than a reference because several
/// engines reorder their internal structure on every access (moving an entry
/// to the front of a list, bumping a frequency bucket), which would conflict
/// with holding a borrow into that structure.
pub trait CacheEngine<K, V> {
    /// This engine's metrics type.
    type Metrics: CacheMetrics;

    /// Inserts or updates `key`. A no-op if the engine's capacity is zero.
    fn put(&mut self, key: K, value: V);

    /// Looks up `key`, returning a clone of its value on a hit.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Looks up `key`, copying its value into `out` and returning `true` on a
    /// hit. Equivalent to [`CacheEngine::get`], but avoids a clone at call
    /// sites that already own a slot to write into.
    fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        match self.get(key) {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Returns `true` if the engine holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is currently live.
    fn contains(&self, key: &K) -> bool;

    /// Read-only access to this engine's metrics.
    fn metrics(&self) -> &Self::Metrics;
}

impl<K: Hash + Eq + Clone, V: Clone> CacheEngine<K, V> for LruCache<K, V> {
    type Metrics = LruCacheMetrics;

    fn put(&mut self, key: K, value: V) {
        LruCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        LruCache::get(self, key)
    }

    fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        LruCache::get_into(self, key, out)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    fn metrics(&self) -> &Self::Metrics {
        LruCache::metrics(self)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> CacheEngine<K, V> for LfuCache<K, V> {
    type Metrics = LfuCacheMetrics;

    fn put(&mut self, key: K, value: V) {
        LfuCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        LfuCache::get(self, key)
    }

    fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        LfuCache::get_into(self, key, out)
    }

    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    fn contains(&self, key: &K) -> bool {
        LfuCache::contains(self, key)
    }

    fn metrics(&self) -> &Self::Metrics {
        LfuCache::metrics(self)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> CacheEngine<K, V> for ArcCache<K, V> {
    type Metrics = ArcCacheMetrics;

    fn put(&mut self, key: K, value: V) {
        ArcCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        ArcCache::get(self, key)
    }

    fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        ArcCache::get_into(self, key, out)
    }

    fn len(&self) -> usize {
        ArcCache::len(self)
    }

    fn contains(&self, key: &K) -> bool {
        ArcCache::contains(self, key)
    }

    fn metrics(&self) -> &Self::Metrics {
        ArcCache::metrics(self)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> CacheEngine<K, V> for LruKCache<K, V> {
    type Metrics = LruKCacheMetrics;

    fn put(&mut self, key: K, value: V) {
        LruKCache::put(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        LruKCache::get(self, key)
    }

    fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        LruKCache::get_into(self, key, out)
    }

    fn len(&self) -> usize {
        LruKCache::len(self)
    }

    fn contains(&self, key: &K) -> bool {
        LruKCache::contains(self, key)
    }

    fn metrics(&self) -> &Self::Metrics {
        LruKCache::metrics(self)
    }
}

/// Aggregated metrics view over whichever engine a [`Cache`] currently holds.
#[derive(Debug, Clone, Copy)]
pub enum CacheEngineMetrics<'a> {
    /// Metrics from an [`LruCache`].
    Lru(&'a LruCacheMetrics),
    /// Metrics from an [`LfuCache`].
    Lfu(&'a LfuCacheMetrics),
    /// Metrics from an [`ArcCache`].
    Arc(&'a ArcCacheMetrics),
    /// Metrics from an [`LruKCache`].
    LruK(&'a LruKCacheMetrics),
}

impl CacheMetrics for CacheEngineMetrics<'_> {
    fn requests(&self) -> u64 {
        match self {
            Self::Lru(m) => m.requests(),
            Self::Lfu(m) => m.requests(),
            Self::Arc(m) => m.requests(),
            Self::LruK(m) => m.requests(),
        }
    }

    fn hits(&self) -> u64 {
        match self {
            Self::Lru(m) => m.hits(),
            Self::Lfu(m) => m.hits(),
            Self::Arc(m) => m.hits(),
            Self::LruK(m) => m.hits(),
        }
    }

    fn evictions(&self) -> u64 {
        match self {
            Self::Lru(m) => m.evictions(),
            Self::Lfu(m) => m.evictions(),
            Self::Arc(m) => m.evictions(),
            Self::LruK(m) => m.evictions(),
        }
    }
}

/// A runtime-selectable handle over any one of the five eviction engines.
///
/// Useful when the policy is chosen from configuration rather than fixed at
/// compile time; callers who know their policy statically should prefer the
/// concrete engine type directly.
pub enum Cache<K, V> {
    /// The recency-ordered engine.
    Lru(LruCache<K, V>),
    /// The frequency-bucketed engine with aging.
    Lfu(LfuCache<K, V>),
    /// The recency/frequency hybrid engine.
    Arc(ArcCache<K, V>),
    /// The admission-filtering wrapper.
    LruK(LruKCache<K, V>),
}

impl<K: Hash + Eq + Clone, V: Clone> Cache<K, V> {
    /// Builds a `Cache` running the LRU policy.
    pub fn lru(config: LruCacheConfig) -> Self {
        Cache::Lru(LruCache::new(config))
    }

    /// Builds a `Cache` running the LFU policy.
    pub fn lfu(config: LfuCacheConfig) -> Self {
        Cache::Lfu(LfuCache::new(config))
    }

    /// Builds a `Cache` running the ARC policy.
    pub fn arc(config: ArcCacheConfig) -> Self {
        Cache::Arc(ArcCache::new(config))
    }

    /// Builds a `Cache` running the LRU-K admission-filtered policy.
    pub fn lruk(config: LruKCacheConfig) -> Self {
        Cache::LruK(LruKCache::new(config))
    }

    /// Inserts or updates `key`, dispatching to the held engine's `put`.
    pub fn put(&mut self, key: K, value: V) {
        match self {
            Cache::Lru(c) => c.put(key, value),
            Cache::Lfu(c) => c.put(key, value),
            Cache::Arc(c) => c.put(key, value),
            Cache::LruK(c) => c.put(key, value),
        }
    }

    /// Looks up `key`, dispatching to the held engine's `get`.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self {
            Cache::Lru(c) => c.get(key),
            Cache::Lfu(c) => c.get(key),
            Cache::Arc(c) => c.get(key),
            Cache::LruK(c) => c.get(key),
        }
    }

    /// Looks up `key`, copying its value into `out` and returning `true` on a
    /// hit. Equivalent to [`Cache::get`], but avoids a clone at call sites
    /// that already own a slot to write into.
    pub fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        match self {
            Cache::Lru(c) => c.get_into(key, out),
            Cache::Lfu(c) => c.get_into(key, out),
            Cache::Arc(c) => c.get_into(key, out),
            Cache::LruK(c) => c.get_into(key, out),
        }
    }

    /// Number of live entries in the held engine.
    pub fn len(&self) -> usize {
        match self {
            Cache::Lru(c) => c.len(),
            Cache::Lfu(c) => c.len(),
            Cache::Arc(c) => c.len(),
            Cache::LruK(c) => c.len(),
        }
    }

    /// Returns `true` if the held engine holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `key` is currently live in the held engine.
    pub fn contains(&self, key: &K) -> bool {
        match self {
            Cache::Lru(c) => c.contains(key),
            Cache::Lfu(c) => c.contains(key),
            Cache::Arc(c) => c.contains(key),
            Cache::LruK(c) => c.contains(key),
        }
    }

    /// Read-only access to the held engine's metrics.
    pub fn metrics(&self) -> CacheEngineMetrics<'_> {
        match self {
            Cache::Lru(c) => CacheEngineMetrics::Lru(c.metrics()),
            Cache::Lfu(c) => CacheEngineMetrics::Lfu(c.metrics()),
            Cache::Arc(c) => CacheEngineMetrics::Arc(c.metrics()),
            Cache::LruK(c) => CacheEngineMetrics::LruK(c.metrics()),
        }
    }
}

impl<K, V> std::fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (name, len) = match self {
            Cache::Lru(c) => ("Lru", c.len()),
            Cache::Lfu(c) => ("Lfu", c.len()),
            Cache::Arc(c) => ("Arc", c.len()),
            Cache::LruK(c) => ("LruK", c.len()),
        };
        f.debug_struct("Cache").field("policy", &name).field("len", &len).finish()
    }
}
