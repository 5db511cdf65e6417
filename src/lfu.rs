//! Least Frequently Used (LFU) cache engine, with aging.
//!
//! Tracks an access-frequency counter per entry and evicts the least
//! frequently used one when full. Entries are grouped into per-frequency
//! buckets so the minimum-frequency bucket is always known in O(1); within a
//! bucket, the oldest-inserted entry is the eviction candidate (FIFO
//! tie-break for entries of equal frequency).
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                         LFU engine (min_freq = 1)                 │
//! │                                                                    │
//! │  HashMap<K, *Node>        bucket[1]: [oldest .. newest]            │
//! │  ┌──────────────┐         bucket[2]: [oldest .. newest]            │
//! │  │ "a" ──────────────────▶ ...                                    │
//! │  │ "b" ──────────────────▶                                        │
//! │  └──────────────┘                                                 │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Aging
//!
//! Pure frequency counting lets long-lived hot keys become permanently
//! unevictable once a workload shifts. After every hit this engine computes
//! `total_hits / size`; once that average exceeds `max_avg`, every live
//! entry's frequency is dampened by `max_avg / 2` (never below 1) and the
//! bucket map is rebuilt around the new frequencies. Aging is lossy by
//! design: it trades exact counts for the ability to forget stale
//! popularity.
//!
//! # Example
//!
//! ```
//! use cache_rs::lfu::LfuCache;
//! use cache_rs::config::LfuCacheConfig;
//!
//! let mut cache = LfuCache::new(LfuCacheConfig::new(2));
//! cache.put(1, "rare");
//! cache.put(2, "popular");
//! for _ in 0..10 {
//!     cache.get(&2);
//! }
//! cache.put(3, "new"); // "rare" (freq 1) evicted over "popular" (freq 11)
//! assert_eq!(cache.get(&1), None);
//! assert_eq!(cache.get(&2), Some("popular"));
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::LfuCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{Entry as ListEntry, List};
use crate::meta::LfuMeta;
use crate::metrics::LfuCacheMetrics;

type Node<K, V> = *mut ListEntry<CacheEntry<K, V, LfuMeta>>;

/// A least-frequently-used cache with O(1) `put`/`get` and periodic aging.
pub struct LfuCache<K, V> {
    capacity: usize,
    max_avg: u64,
    map: HashMap<K, Node<K, V>>,
    buckets: HashMap<u64, List<CacheEntry<K, V, LfuMeta>>>,
    min_freq: u64,
    total_hits: u64,
    metrics: LfuCacheMetrics,
}

unsafe impl<K: Send, V: Send> Send for LfuCache<K, V> {}

impl<K: Hash + Eq + Clone, V: Clone> LfuCache<K, V> {
    /// Creates a new engine from an [`LfuCacheConfig`].
    pub fn new(config: LfuCacheConfig) -> Self {
        Self {
            capacity: config.capacity,
            max_avg: config.max_avg.max(1),
            map: HashMap::new(),
            buckets: HashMap::new(),
            min_freq: 1,
            total_hits: 0,
            metrics: LfuCacheMetrics::default(),
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The smallest frequency with a non-empty bucket (arbitrary when empty).
    pub fn min_freq(&self) -> u64 {
        self.min_freq
    }

    /// Read-only access to this engine's metrics.
    pub fn metrics(&self) -> &LfuCacheMetrics {
        &self.metrics
    }

    /// Inserts or updates `key`. Updating an existing key counts as an
    /// access, bumping its frequency exactly like [`LfuCache::get`]. A new
    /// key is admitted at frequency 1, evicting the oldest entry in the
    /// minimum-frequency bucket first if the engine is at capacity. A no-op
    /// when `capacity == 0`.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&node) = self.map.get(&key) {
            unsafe { self.list_at(node).value_mut(node).value = value };
            self.bump_frequency(&key);
            return;
        }
        if self.map.len() == self.capacity {
            self.evict_one();
        }
        let entry = CacheEntry::new(key.clone(), value, LfuMeta::new());
        let node = self.buckets.entry(1).or_insert_with(List::new).push_back(entry);
        self.map.insert(key, node);
        self.min_freq = 1;
    }

    /// Looks up `key`, copying its value into `out` and returning `true` on a
    /// hit. A hit bumps the entry's frequency by one.
    pub fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        if let Some(&node) = self.map.get(key) {
            unsafe { *out = self.list_at(node).value(node).value.clone() };
            self.bump_frequency(key);
            self.metrics.record_hit();
            true
        } else {
            self.metrics.record_miss();
            false
        }
    }

    /// Looks up `key`, returning a clone of its value on a hit.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let &node = self.map.get(key)?;
        let value = unsafe { self.list_at(node).value(node).value.clone() };
        self.bump_frequency(key);
        self.metrics.record_hit();
        Some(value)
    }

    /// Returns `true` if `key` is currently live, without affecting frequency.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn list_at(&mut self, node: Node<K, V>) -> &mut List<CacheEntry<K, V, LfuMeta>> {
        let freq = unsafe { (*node).value().metadata.freq };
        self.buckets.get_mut(&freq).expect("node's bucket must exist")
    }

    /// Moves the node for `key` from its current bucket to the next one up,
    /// maintaining the `min_freq` cursor and the total-hits counter used by
    /// aging.
    fn bump_frequency(&mut self, key: &K) {
        let &node = self.map.get(key).expect("key must be live");
        let old_freq = unsafe { self.list_at(node).value(node).metadata.freq };
        let mut entry = unsafe { self.list_at(node).unlink(node) };

        if self.min_freq == old_freq {
            let bucket_empty = self
                .buckets
                .get(&old_freq)
                .map(List::is_empty)
                .unwrap_or(true);
            if bucket_empty {
                self.min_freq = old_freq + 1;
            }
        }

        entry.metadata.freq = old_freq + 1;
        let new_freq = entry.metadata.freq;
        let new_node = self
            .buckets
            .entry(new_freq)
            .or_insert_with(List::new)
            .push_back(entry);
        self.map.insert(key.clone(), new_node);

        self.total_hits += 1;
        self.maybe_age();
    }

    fn evict_one(&mut self) {
        let Some(bucket) = self.buckets.get_mut(&self.min_freq) else {
            return;
        };
        if let Some(entry) = bucket.pop_front() {
            self.map.remove(&entry.key);
            self.metrics.record_eviction();
        }
    }

    /// Performs a global aging pass if `total_hits / size` has crossed
    /// `max_avg`. Dampens every live frequency by `max_avg / 2` (never below
    /// 1), rebuilds bucket membership around the new frequencies, and
    /// recomputes `min_freq` by scanning the surviving bucket keys.
    fn maybe_age(&mut self) {
        let size = self.map.len() as u64;
        if size == 0 {
            return;
        }
        let avg = self.total_hits / size;
        if avg <= self.max_avg {
            return;
        }

        let decrement = (self.max_avg / 2).max(1);
        let old_buckets = std::mem::take(&mut self.buckets);
        let mut new_buckets: HashMap<u64, List<CacheEntry<K, V, LfuMeta>>> = HashMap::new();

        for (_, mut list) in old_buckets {
            while let Some(mut entry) = list.pop_front() {
                entry.metadata.freq = entry.metadata.freq.saturating_sub(decrement).max(1);
                let new_node = new_buckets
                    .entry(entry.metadata.freq)
                    .or_insert_with(List::new)
                    .push_back(entry);
                self.map.insert(
                    unsafe { (*new_node).value().key.clone() },
                    new_node,
                );
            }
        }

        self.buckets = new_buckets;
        self.min_freq = self.buckets.keys().copied().min().unwrap_or(1);
        self.total_hits = 0;
        self.metrics.record_aging_pass();
    }
}

impl<K, V> std::fmt::Debug for LfuCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .field("min_freq", &self.min_freq)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CacheMetrics;

    fn cache(capacity: usize) -> LfuCache<i32, &'static str> {
        LfuCache::new(LfuCacheConfig::new(capacity))
    }

    #[test]
    fn tie_break_evicts_oldest_of_equal_frequency() {
        // Capacity 2. put(1,"a"), put(2,"b"), get(1), put(3,"c").
        // 2 and 3 both at freq 1; 2 is older -> evicted.
        let mut cache = cache(2);
        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.get(&1), Some("a"));
        cache.put(3, "c");
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), Some("c"));
        assert_eq!(cache.get(&1), Some("a"));
    }

    #[test]
    fn zero_capacity_is_a_no_op() {
        let mut cache = cache(0);
        cache.put(1, "a");
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn aging_dampens_a_long_lived_hot_key() {
        // Capacity 3, max_avg 4. put(1,x); get(1) x50; put(2..4,_).
        let mut cache: LfuCache<i32, &'static str> =
            LfuCache::new(LfuCacheConfig::with_max_avg(3, 4));
        cache.put(1, "x");
        for _ in 0..50 {
            cache.get(&1);
        }
        assert!(cache.metrics().aging_passes > 0, "aging must have triggered");

        let freq_after = {
            let &node = cache.map.get(&1).unwrap();
            unsafe { (*node).value().metadata.freq }
        };
        assert!(
            freq_after < 51,
            "aging should have dampened key 1's frequency below its raw hit count"
        );

        cache.put(2, "y");
        cache.put(3, "z");
        cache.put(4, "w"); // may now evict key 1 if its aged freq is the minimum
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn updating_an_existing_key_counts_as_an_access() {
        let mut cache = cache(2);
        cache.put(1, "a");
        cache.put(1, "a2");
        let &node = cache.map.get(&1).unwrap();
        assert_eq!(unsafe { (*node).value().metadata.freq }, 2);
        assert_eq!(cache.get(&1), Some("a2"));
    }
}
