//! LRU-K admission filter.
//!
//! Wraps a plain [`LruCache`] main cache with an admission test: a key must
//! be observed `k` times in a bounded recency history before it is promoted
//! into the main cache at all. This keeps one-off keys from displacing
//! entries that have demonstrated repeat access, at the cost of the first
//! `k - 1` observations of any new key being pure misses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      LRU-K admission filter                     │
//! │                                                                 │
//! │  history (K -> hit count, bounded)     main cache (LRU)         │
//! │  ┌────────────────┐                    ┌─────────────────┐     │
//! │  │ "x": 1         │   k observations    │ "a" -> 1         │     │
//! │  │ "y": 2    ────────────────────────▶  │ "b" -> 2         │     │
//! │  └────────────────┘                    └─────────────────┘     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use cache_rs::lruk::LruKCache;
//! use cache_rs::config::LruKCacheConfig;
//!
//! let mut cache = LruKCache::new(LruKCacheConfig::new(2, 4, 2));
//! cache.put("a", 1); // 1st observation, not yet admitted
//! assert!(!cache.contains(&"a"));
//! assert_eq!(cache.get(&"a"), Some(1)); // this get is the 2nd observation, admitting it
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::LruKCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{Entry as ListEntry, List};
use crate::lru::LruCache;
use crate::metrics::LruKCacheMetrics;

type HistNode<K> = *mut ListEntry<CacheEntry<K, u64>>;

/// An admission-filtered cache: entries only reach the main LRU cache once
/// they have been observed `k` times.
pub struct LruKCache<K, V> {
    k: u64,
    history_capacity: usize,
    main: LruCache<K, V>,
    history_list: List<CacheEntry<K, u64>>,
    history_map: HashMap<K, HistNode<K>>,
    pending: HashMap<K, V>,
    metrics: LruKCacheMetrics,
}

unsafe impl<K: Send, V: Send> Send for LruKCache<K, V> {}

impl<K: Hash + Eq + Clone, V: Clone> LruKCache<K, V> {
    /// Creates a new engine from an [`LruKCacheConfig`].
    pub fn new(config: LruKCacheConfig) -> Self {
        Self {
            k: config.k.max(1),
            history_capacity: config.history_capacity,
            main: LruCache::new(crate::config::LruCacheConfig::new(config.main_capacity)),
            history_list: List::new(),
            history_map: HashMap::new(),
            pending: HashMap::new(),
            metrics: LruKCacheMetrics::default(),
        }
    }

    /// Number of entries admitted into the main cache (history entries don't
    /// count).
    pub fn len(&self) -> usize {
        self.main.len()
    }

    /// Returns `true` if no entries have been admitted into the main cache.
    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    /// Read-only access to this engine's metrics.
    pub fn metrics(&self) -> &LruKCacheMetrics {
        &self.metrics
    }

    /// Records an observation of `key`. If the key is already admitted, this
    /// behaves like a normal LRU update. Otherwise the observation is
    /// recorded in the history and `value` is held pending; once the `k`-th
    /// observation is recorded the key is admitted into the main cache with
    /// its most recently supplied value.
    pub fn put(&mut self, key: K, value: V) {
        if self.main.contains(&key) {
            self.main.put(key, value);
            return;
        }

        let count = self.bump_history(&key);
        if count >= self.k {
            self.remove_history(&key);
            self.pending.remove(&key);
            self.main.put(key, value);
            self.metrics.record_admission();
        } else {
            self.pending.insert(key, value);
        }
    }

    /// Looks up `key`, returning a clone of its value if it has been
    /// admitted into the main cache. A miss on a key still in its admission
    /// history is still recorded as an observation — bumping its history
    /// count exactly as a `put` would — and if that observation is the
    /// `k`-th, the key's previously pending value is promoted into the main
    /// cache and returned.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if let Some(value) = self.main.get(key) {
            self.metrics.record_hit();
            return Some(value);
        }

        let count = self.bump_history(key);
        if count >= self.k {
            if let Some(value) = self.pending.remove(key) {
                self.remove_history(key);
                self.main.put(key.clone(), value.clone());
                self.metrics.record_admission();
                self.metrics.record_hit();
                return Some(value);
            }
        }
        self.metrics.record_miss();
        None
    }

    /// Looks up `key`, copying its value into `out` and returning `true` on a
    /// hit. Equivalent to [`LruKCache::get`], but avoids a clone at call
    /// sites that already own a slot to write into.
    pub fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        match self.get(key) {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `key` has been admitted into the main cache.
    pub fn contains(&self, key: &K) -> bool {
        self.main.contains(key)
    }

    fn bump_history(&mut self, key: &K) -> u64 {
        if self.history_capacity == 0 {
            // No room to track observations at all; treat every key as
            // having already met the admission bar.
            return self.k;
        }
        if let Some(&node) = self.history_map.get(key) {
            unsafe {
                self.history_list.move_to_front(node);
                let entry = self.history_list.value_mut(node);
                entry.value += 1;
                entry.value
            }
        } else {
            if self.history_map.len() == self.history_capacity {
                self.evict_history_victim();
            }
            let node = self
                .history_list
                .push_front(CacheEntry::new(key.clone(), 1, ()));
            self.history_map.insert(key.clone(), node);
            1
        }
    }

    fn remove_history(&mut self, key: &K) {
        if let Some(node) = self.history_map.remove(key) {
            unsafe {
                self.history_list.unlink(node);
            }
        }
    }

    fn evict_history_victim(&mut self) {
        if let Some(entry) = self.history_list.pop_back() {
            self.history_map.remove(&entry.key);
            self.pending.remove(&entry.key);
        }
    }
}

impl<K, V> std::fmt::Debug for LruKCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruKCache")
            .field("k", &self.k)
            .field("main_len", &self.main.len())
            .field("history_len", &self.history_map.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_only_after_k_observations() {
        let mut cache = LruKCache::new(LruKCacheConfig::new(2, 4, 3));
        cache.put(1, "a1");
        cache.put(1, "a2");
        assert!(!cache.contains(&1)); // two observations, not yet admitted
        cache.put(1, "a3");
        assert_eq!(cache.get(&1), Some("a3"));
    }

    #[test]
    fn get_supplies_the_kth_observation_and_admits() {
        // Mirrors a put-driven admission but with the final touch coming from
        // a get instead of a put: the get itself promotes and returns the
        // pending value, rather than requiring a third put.
        let mut cache = LruKCache::new(LruKCacheConfig::new(2, 4, 3));
        cache.put(1, "a");
        cache.put(1, "a");
        assert_eq!(cache.get(&1), Some("a"));
        assert!(cache.contains(&1));
    }

    #[test]
    fn zero_main_capacity_is_a_no_op() {
        let mut cache = LruKCache::new(LruKCacheConfig::new(0, 4, 1));
        cache.put(1, "a");
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn history_eviction_resets_the_observation_count() {
        let mut cache = LruKCache::new(LruKCacheConfig::new(4, 1, 2));
        cache.put(1, "a"); // history: {1}
        cache.put(2, "b"); // history capacity 1: 1 evicted, pending for 1 dropped
        cache.put(1, "a-again"); // back to a first observation, not a second
        assert!(!cache.contains(&1));
        assert_eq!(cache.get(&1), Some("a-again")); // this get is the 2nd observation
    }

    #[test]
    fn admitted_key_behaves_like_plain_lru_afterward() {
        let mut cache = LruKCache::new(LruKCacheConfig::new(1, 4, 1));
        cache.put(1, "a");
        assert_eq!(cache.get(&1), Some("a"));
        cache.put(1, "a2");
        assert_eq!(cache.get(&1), Some("a2"));
        assert_eq!(cache.metrics().admissions, 1);
    }
}
