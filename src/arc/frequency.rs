//! T2: the frequency-side sub-cache.
//!
//! Structurally LFU-like: entries are grouped into frequency buckets with a
//! `min_freq` cursor, but without the aging pass LFU uses (ARC's own
//! ghost-driven capacity rebalance already keeps this side adaptive). Also
//! carries a ghost list of bare keys, mirroring the recency side.

use std::collections::HashMap;
use std::hash::Hash;

use crate::entry::CacheEntry;
use crate::list::{Entry as ListEntry, List};
use crate::meta::LfuMeta;

type Node<K, V> = *mut ListEntry<CacheEntry<K, V, LfuMeta>>;
type GhostNode<K> = *mut ListEntry<K>;

pub(crate) struct FrequencySubCache<K, V> {
    capacity: usize,
    map: HashMap<K, Node<K, V>>,
    buckets: HashMap<u64, List<CacheEntry<K, V, LfuMeta>>>,
    min_freq: u64,
    ghost: List<K>,
    ghost_map: HashMap<K, GhostNode<K>>,
    evictions: u64,
}

impl<K: Hash + Eq + Clone, V: Clone> FrequencySubCache<K, V> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::new(),
            buckets: HashMap::new(),
            min_freq: 1,
            ghost: List::new(),
            ghost_map: HashMap::new(),
            evictions: 0,
        }
    }

    /// Returns and resets the number of live-to-ghost evictions since the
    /// last call, for the coordinator to fold into its own metrics.
    pub(crate) fn take_evictions(&mut self) -> u64 {
        std::mem::take(&mut self.evictions)
    }

    pub(crate) fn live_len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Inserts `key` fresh at frequency 1, or updates it in place if already
    /// live (used when the recency side mirrors a key onto this side).
    /// Returns `true` if the key ends up live.
    pub(crate) fn put(&mut self, key: K, value: V) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if let Some(&node) = self.map.get(&key) {
            unsafe { self.bucket_of(node).value_mut(node).value = value };
            return true;
        }
        if self.map.len() == self.capacity {
            self.evict_to_ghost();
        }
        let entry = CacheEntry::new(key.clone(), value, LfuMeta::new());
        let node = self.buckets.entry(1).or_insert_with(List::new).push_back(entry);
        self.map.insert(key, node);
        self.min_freq = 1;
        true
    }

    /// Looks up `key`, bumping its frequency bucket on a hit.
    pub(crate) fn get(&mut self, key: &K) -> Option<V> {
        let &node = self.map.get(key)?;
        let value = unsafe { self.bucket_of(node).value(node).value.clone() };
        self.bump_frequency(key);
        Some(value)
    }

    pub(crate) fn check_ghost(&mut self, key: &K) -> bool {
        match self.ghost_map.remove(key) {
            Some(node) => {
                unsafe { self.ghost.unlink(node) };
                true
            }
            None => false,
        }
    }

    pub(crate) fn increase_capacity(&mut self) {
        self.capacity += 1;
    }

    pub(crate) fn decrease_capacity(&mut self) -> bool {
        if self.capacity == 0 {
            return false;
        }
        self.capacity -= 1;
        if self.map.len() > self.capacity {
            self.evict_to_ghost();
        }
        true
    }

    fn bucket_of(&mut self, node: Node<K, V>) -> &mut List<CacheEntry<K, V, LfuMeta>> {
        let freq = unsafe { (*node).value().metadata.freq };
        self.buckets.get_mut(&freq).expect("node's bucket must exist")
    }

    fn bump_frequency(&mut self, key: &K) {
        let &node = self.map.get(key).expect("key must be live");
        let old_freq = unsafe { self.bucket_of(node).value(node).metadata.freq };
        let mut entry = unsafe { self.bucket_of(node).unlink(node) };

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
        let new_node = self.buckets.entry(new_freq).or_insert_with(List::new).push_back(entry);
        self.map.insert(key.clone(), new_node);
    }

    fn evict_to_ghost(&mut self) {
        let Some(bucket) = self.buckets.get_mut(&self.min_freq) else {
            return;
        };
        let Some(entry) = bucket.pop_front() else {
            return;
        };
        self.map.remove(&entry.key);
        self.evictions += 1;
        if self.ghost_map.len() >= self.capacity.max(1) {
            if let Some(oldest) = self.ghost.pop_back() {
                self.ghost_map.remove(&oldest);
            }
        }
        let ghost_node = self.ghost.push_front(entry.key.clone());
        self.ghost_map.insert(entry.key, ghost_node);
    }
}
