//! T1: the recency-side sub-cache.
//!
//! Structurally an LRU list plus a per-entry hit counter ([`ArcMeta`]) used to
//! decide when an entry has earned promotion to the frequency side, and a
//! ghost list of bare keys recording recent evictions for the capacity
//! rebalance signal.

use std::collections::HashMap;
use std::hash::Hash;

use crate::entry::CacheEntry;
use crate::list::{Entry as ListEntry, List};
use crate::meta::ArcMeta;

type Node<K, V> = *mut ListEntry<CacheEntry<K, V, ArcMeta>>;
type GhostNode<K> = *mut ListEntry<K>;

pub(crate) struct RecencySubCache<K, V> {
    capacity: usize,
    live: List<CacheEntry<K, V, ArcMeta>>,
    live_map: HashMap<K, Node<K, V>>,
    ghost: List<K>,
    ghost_map: HashMap<K, GhostNode<K>>,
    evictions: u64,
}

impl<K: Hash + Eq + Clone, V: Clone> RecencySubCache<K, V> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            live: List::new(),
            live_map: HashMap::new(),
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
        self.live_map.len()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.live_map.contains_key(key)
    }

    /// Inserts or refreshes `key` as live. Returns `true` if the key ends up
    /// live in this sub-cache (always, unless `capacity == 0`).
    pub(crate) fn put(&mut self, key: K, value: V) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if let Some(&node) = self.live_map.get(&key) {
            unsafe {
                self.live.value_mut(node).value = value;
                self.live.move_to_front(node);
            }
            return true;
        }
        if self.live_map.len() == self.capacity {
            self.evict_to_ghost();
        }
        let node = self
            .live
            .push_front(CacheEntry::new(key.clone(), value, ArcMeta::new()));
        self.live_map.insert(key, node);
        true
    }

    /// Looks up `key`. On a hit, bumps its counter, moves it to the front,
    /// and reports whether the counter has crossed `threshold`.
    pub(crate) fn get(&mut self, key: &K, threshold: u64) -> Option<(V, bool)> {
        let &node = self.live_map.get(key)?;
        unsafe {
            self.live.move_to_front(node);
            let entry = self.live.value_mut(node);
            entry.metadata.hits += 1;
            let should_promote = entry.metadata.hits >= threshold;
            Some((entry.value.clone(), should_promote))
        }
    }

    /// Removes `key` from the live list without touching the ghost list,
    /// used when an entry is promoted to the frequency side.
    pub(crate) fn take(&mut self, key: &K) -> Option<V> {
        let node = self.live_map.remove(key)?;
        let entry = unsafe { self.live.unlink(node) };
        Some(entry.value)
    }

    /// Removes `key` from the ghost list if present, returning `true` on a
    /// hit.
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

    /// Shrinks the live budget by one, evicting if necessary. Returns `false`
    /// (refusing to shrink further) once capacity is already zero.
    pub(crate) fn decrease_capacity(&mut self) -> bool {
        if self.capacity == 0 {
            return false;
        }
        self.capacity -= 1;
        if self.live_map.len() > self.capacity {
            self.evict_to_ghost();
        }
        true
    }

    fn evict_to_ghost(&mut self) {
        let Some(entry) = self.live.pop_back() else {
            return;
        };
        self.live_map.remove(&entry.key);
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
