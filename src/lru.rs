//! Least Recently Used (LRU) cache engine.
//!
//! Evicts the item that hasn't been accessed for the longest time. Backed by
//! a hash index into an intrusive recency list: the front of the list is the
//! most-recently-used end, the back is the eviction candidate.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        LRU engine                               │
//! │                                                                 │
//! │  HashMap<K, *Node>          Doubly-linked recency list          │
//! │  ┌──────────────┐          ┌──────────────────────────────┐    │
//! │  │ "apple" ──────────────▶ │ MRU ◀──▶ ... ◀──▶ LRU        │    │
//! │  │ "banana" ─────────────▶ │  ▲                    │      │    │
//! │  │ "cherry" ─────────────▶ │  │                    ▼      │    │
//! │  └──────────────┘          │ front              back       │    │
//! │                            └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both `get` and `put` of a live key move it to the front in O(1); eviction
//! pops from the back in O(1).
//!
//! # Example
//!
//! ```
//! use cache_rs::lru::LruCache;
//! use cache_rs::config::LruCacheConfig;
//!
//! let mut cache = LruCache::new(LruCacheConfig::new(2));
//! cache.put("a", 1);
//! cache.put("b", 2);
//! assert_eq!(cache.get(&"a"), Some(1)); // "a" becomes most recently used
//! cache.put("c", 3);                    // "b" evicted (least recently used)
//! assert_eq!(cache.get(&"b"), None);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{Entry as ListEntry, List};
use crate::metrics::LruCacheMetrics;

type Node<K, V> = *mut ListEntry<CacheEntry<K, V>>;

/// A least-recently-used cache with O(1) `put`, `get`, and `remove`.
///
/// `capacity == 0` is legal: `put` is then a no-op and `get` always misses.
pub struct LruCache<K, V> {
    capacity: usize,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, Node<K, V>>,
    metrics: LruCacheMetrics,
}

// SAFETY: LruCache owns every node its map points into; no pointer escapes
// the struct, so sharing `&LruCache` across threads carries no extra risk
// beyond what `K: Sync, V: Sync` already implies.
unsafe impl<K: Send, V: Send> Send for LruCache<K, V> {}

impl<K: Hash + Eq + Clone, V: Clone> LruCache<K, V> {
    /// Creates a new engine from a [`LruCacheConfig`].
    pub fn new(config: LruCacheConfig) -> Self {
        Self {
            capacity: config.capacity,
            list: List::new(),
            map: HashMap::new(),
            metrics: LruCacheMetrics::default(),
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

    /// Read-only access to this engine's metrics.
    pub fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Inserts or updates `key`. If `key` is already live its value is
    /// replaced and it is moved to the most-recently-used position; otherwise
    /// a new entry is admitted, evicting the least-recently-used entry first
    /// if the engine is at capacity. A no-op when `capacity == 0`.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&node) = self.map.get(&key) {
            unsafe {
                self.list.value_mut(node).value = value;
                self.list.move_to_front(node);
            }
            return;
        }
        if self.map.len() == self.capacity {
            self.evict_one();
        }
        let node = self.list.push_front(CacheEntry::new(key.clone(), value, ()));
        self.map.insert(key, node);
    }

    /// Looks up `key`, copying its value into `out` and returning `true` on a
    /// hit. A hit moves the entry to the most-recently-used position.
    pub fn get_into(&mut self, key: &K, out: &mut V) -> bool {
        match self.map.get(key) {
            Some(&node) => {
                unsafe {
                    self.list.move_to_front(node);
                    *out = self.list.value(node).value.clone();
                }
                self.metrics.record_hit();
                true
            }
            None => {
                self.metrics.record_miss();
                false
            }
        }
    }

    /// Looks up `key`, returning a clone of its value on a hit.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let node = *self.map.get(key)?;
        unsafe {
            self.list.move_to_front(node);
            let value = self.list.value(node).value.clone();
            self.metrics.record_hit();
            Some(value)
        }
    }

    /// Removes `key` if present, returning its value. A no-op (returning
    /// `None`) if the key is absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.map.remove(key)?;
        let entry = unsafe { self.list.unlink(node) };
        Some(entry.value)
    }

    /// Returns `true` if `key` is currently live, without affecting order.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn evict_one(&mut self) {
        if let Some(entry) = self.list.pop_back() {
            self.map.remove(&entry.key);
            self.metrics.record_eviction();
        }
    }
}

impl<K, V> std::fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CacheMetrics;

    fn cache(capacity: usize) -> LruCache<i32, &'static str> {
        LruCache::new(LruCacheConfig::new(capacity))
    }

    #[test]
    fn basic_eviction_scenario() {
        // Capacity 2. put(1,"a"), put(2,"b"), get(1), put(3,"c"), get(2).
        let mut cache = cache(2);
        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.get(&1), Some("a"));
        cache.put(3, "c");
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some("a"));
        assert_eq!(cache.get(&3), Some("c"));
    }

    #[test]
    fn zero_capacity_is_a_no_op() {
        let mut cache = cache(0);
        cache.put(1, "a");
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn update_existing_key_moves_to_front_without_growing() {
        let mut cache = cache(2);
        cache.put(1, "a");
        cache.put(2, "b");
        cache.put(1, "a2");
        assert_eq!(cache.len(), 2);
        cache.put(3, "c"); // evicts 2, since 1 was refreshed
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some("a2"));
    }

    #[test]
    fn remove_absent_key_is_a_no_op() {
        let mut cache = cache(2);
        cache.put(1, "a");
        assert_eq!(cache.remove(&2), None);
        assert_eq!(cache.remove(&1), Some("a"));
        assert!(cache.is_empty());
    }

    #[test]
    fn eviction_budget_matches_n_minus_capacity() {
        let mut cache = cache(4);
        for i in 0..10 {
            cache.put(i, "x");
        }
        assert_eq!(cache.metrics().evictions(), 6);
        assert_eq!(cache.len(), 4);
    }
}
