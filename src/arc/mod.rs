//! Adaptive Replacement Cache (ARC) engine.
//!
//! Splits live entries across two sub-caches: [`recency`] (T1, LRU-like,
//! tracks keys seen once) and [`frequency`] (T2, LFU-like, tracks keys seen
//! more than once). Each side also keeps a ghost list of bare keys recording
//! recent evictions. A ghost hit is a signal that the side evicting too
//! eagerly should grow at the other side's expense, so each side's live
//! capacity is shifted by one and the two sub-caches track a shared overall
//! budget without a central free list.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         ARC engine                                │
//! │                                                                    │
//! │   B1 (ghost) ◀── T1 (recency, LRU) ──▶ T2 (frequency, LFU) ──▶ B2  │
//! │                                                                    │
//! │   ghost hit on B1 shrinks T2, grows T1 (and vice versa for B2)     │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A key already live on one side is mirrored onto the other at first
//! insertion so both sides track it until it earns enough hits on T1 to be
//! promoted onto T2 ([`ArcCacheConfig::transform_threshold`]).
//!
//! # Example
//!
//! ```
//! use cache_rs::arc::ArcCache;
//! use cache_rs::config::ArcCacheConfig;
//!
//! let mut cache = ArcCache::new(ArcCacheConfig::new(2));
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Some(1));
//! cache.put("c", 3);
//! ```

mod frequency;
mod recency;

use std::hash::Hash;

use frequency::FrequencySubCache;
use recency::RecencySubCache;

use crate::config::ArcCacheConfig;
use crate::metrics::ArcCacheMetrics;

/// An adaptive cache that self-balances between recency and frequency
/// eviction pressure based on observed ghost-list hits.
pub struct ArcCache<K, V> {
    threshold: u64,
    t1: RecencySubCache<K, V>,
    t2: FrequencySubCache<K, V>,
    metrics: ArcCacheMetrics,
}

unsafe impl<K: Send, V: Send> Send for ArcCache<K, V> {}

impl<K: Hash + Eq + Clone, V: Clone> ArcCache<K, V> {
    /// Creates a new engine from an [`ArcCacheConfig`]. Both sides start with
    /// the configured capacity as their live budget.
    pub fn new(config: ArcCacheConfig) -> Self {
        Self {
            threshold: config.transform_threshold.max(1),
            t1: RecencySubCache::new(config.capacity),
            t2: FrequencySubCache::new(config.capacity),
            metrics: ArcCacheMetrics::default(),
        }
    }

    /// Total live entries across both sides.
    pub fn len(&self) -> usize {
        self.t1.live_len() + self.t2.live_len()
    }

    /// Returns `true` if neither side holds any entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-only access to this engine's metrics.
    pub fn metrics(&self) -> &ArcCacheMetrics {
        &self.metrics
    }

    /// Inserts or updates `key`. Consults both ghost lists first: a ghost hit
    /// rebalances capacity between the two sides before the key is admitted.
    /// A fresh (non-ghost) key is inserted into T1 and mirrored into T2 so
    /// both sides track it until it earns a promotion. A no-op only when
    /// both sides have zero capacity.
    pub fn put(&mut self, key: K, value: V) {
        let in_b1 = self.t1.check_ghost(&key);
        let in_b2 = if in_b1 { false } else { self.t2.check_ghost(&key) };
        self.rebalance_on_ghost_hit(in_b1, in_b2);

        if in_b1 || in_b2 {
            self.t1.put(key, value);
        } else if self.t1.put(key.clone(), value.clone()) {
            self.t2.put(key, value);
        }

        self.drain_eviction_counts();
    }

    /// Looks up `key`. A hit on T1 that crosses the transform threshold
    /// promotes the entry onto T2 (updating it there if already tracked,
    /// inserting otherwise) and removes it from T1.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let in_b1 = self.t1.check_ghost(key);
        let in_b2 = if in_b1 { false } else { self.t2.check_ghost(key) };
        self.rebalance_on_ghost_hit(in_b1, in_b2);

        let result = if let Some((value, should_promote)) = self.t1.get(key, self.threshold) {
            if should_promote {
                if let Some(promoted) = self.t1.take(key) {
                    self.t2.put(key.clone(), promoted);
                    self.metrics.record_promotion();
                }
            }
            self.metrics.record_hit();
            Some(value)
        } else if let Some(value) = self.t2.get(key) {
            self.metrics.record_hit();
            Some(value)
        } else {
            self.metrics.record_miss();
            None
        };

        self.drain_eviction_counts();
        result
    }

    /// Looks up `key`, copying its value into `out` and returning `true` on a
    /// hit. Equivalent to [`ArcCache::get`], but avoids a clone at call sites
    /// that already own a slot to write into.
    pub fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        match self.get(key) {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `key` is currently live on either side.
    pub fn contains(&self, key: &K) -> bool {
        self.t1.contains(key) || self.t2.contains(key)
    }

    fn rebalance_on_ghost_hit(&mut self, in_b1: bool, in_b2: bool) {
        if in_b1 {
            if self.t2.decrease_capacity() {
                self.t1.increase_capacity();
            }
            self.metrics.record_ghost_hit();
        } else if in_b2 {
            if self.t1.decrease_capacity() {
                self.t2.increase_capacity();
            }
            self.metrics.record_ghost_hit();
        }
    }

    /// Folds any live-to-ghost evictions either side performed during the
    /// current `put`/`get` call into this engine's own metrics.
    fn drain_eviction_counts(&mut self) {
        let evicted = self.t1.take_evictions() + self.t2.take_evictions();
        for _ in 0..evicted {
            self.metrics.record_eviction();
        }
    }
}

impl<K, V> std::fmt::Debug for ArcCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArcCache")
            .field("t1_len", &self.t1.live_len())
            .field("t2_len", &self.t2.live_len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CacheMetrics;

    #[test]
    fn basic_hit_and_miss() {
        let mut cache = ArcCache::new(ArcCacheConfig::new(2));
        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.get(&1), Some("a"));
        assert_eq!(cache.get(&3), None);
    }

    #[test]
    fn zero_capacity_is_a_no_op() {
        let mut cache: ArcCache<i32, &str> = ArcCache::new(ArcCacheConfig::new(0));
        cache.put(1, "a");
        assert_eq!(cache.get(&1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn repeated_hits_promote_to_frequency_side() {
        let mut cache = ArcCache::new(ArcCacheConfig::with_transform_threshold(4, 2));
        cache.put(1, "a");
        cache.get(&1);
        cache.get(&1);
        assert_eq!(cache.metrics().promotions, 1);
        assert!(cache.t2.contains(&1));
        assert!(!cache.t1.contains(&1));
    }

    #[test]
    fn ghost_hit_rebalances_capacity() {
        // Capacity 2, so T1 evicts its oldest live entry into its ghost list
        // once a third distinct key arrives. Re-inserting the evicted key
        // hits that ghost list and triggers a rebalance.
        let mut cache = ArcCache::new(ArcCacheConfig::with_transform_threshold(2, 100));
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(3, "c"); // 1 evicted from T1 live into T1 ghost
        cache.put(1, "a-again"); // ghost hit on B1
        assert_eq!(cache.metrics().ghost_hits, 1);
        assert!(cache.contains(&1));
    }

    #[test]
    fn eviction_into_a_ghost_list_is_counted() {
        let mut cache = ArcCache::new(ArcCacheConfig::with_transform_threshold(2, 100));
        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.metrics().evictions(), 0);
        cache.put(3, "c"); // 1 evicted from T1 live into T1 ghost
        assert_eq!(cache.metrics().evictions(), 1);
    }
}
