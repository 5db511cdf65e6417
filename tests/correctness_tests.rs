//! End-to-end correctness scenarios for every eviction engine.
//!
//! Exercises each policy through its public API exactly as an external
//! caller would, rather than poking at internals the way the unit tests in
//! `src/` do.

use cache_rs::arc::ArcCache;
use cache_rs::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use cache_rs::lfu::LfuCache;
use cache_rs::lru::LruCache;
use cache_rs::lruk::LruKCache;
use cache_rs::metrics::CacheMetrics;

#[test]
fn lru_evicts_the_least_recently_used_entry() {
    let mut cache = LruCache::new(LruCacheConfig::new(2));
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), Some(1)); // "a" refreshed, "b" now stale
    cache.put("c", 3); // evicts "b"
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.get(&"a"), Some(1));
    assert_eq!(cache.get(&"c"), Some(3));
}

#[test]
fn lru_capacity_zero_never_admits_anything() {
    let mut cache: LruCache<i32, i32> = LruCache::new(LruCacheConfig::new(0));
    cache.put(1, 1);
    cache.put(2, 2);
    assert_eq!(cache.get(&1), None);
    assert!(cache.is_empty());
}

#[test]
fn lfu_breaks_ties_by_insertion_order() {
    let mut cache = LfuCache::new(LfuCacheConfig::new(2));
    cache.put(1, "a");
    cache.put(2, "b");
    assert_eq!(cache.get(&1), Some("a")); // 1 at freq 2, 2 at freq 1
    cache.put(3, "c"); // evicts 2 (freq 1, the minimum)
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some("a"));
    assert_eq!(cache.get(&3), Some("c"));
}

#[test]
fn lfu_aging_lets_a_cold_workload_displace_a_once_hot_key() {
    let mut cache = LfuCache::new(LfuCacheConfig::with_max_avg(3, 2));
    cache.put(1, "hot");
    for _ in 0..30 {
        cache.get(&1);
    }
    assert!(cache.metrics().aging_passes > 0);

    cache.put(2, "a");
    cache.put(3, "b");
    for _ in 0..5 {
        cache.get(&2);
        cache.get(&3);
    }
    cache.put(4, "c");
    // Without aging, key 1's raw frequency (30) would make it permanently
    // unevictable; aging must have dampened it enough that the cache can
    // still hold exactly `capacity` entries.
    assert_eq!(cache.len(), 3);
}

#[test]
fn arc_promotes_a_twice_hit_key_off_the_recency_side() {
    let mut cache = ArcCache::new(ArcCacheConfig::with_transform_threshold(3, 2));
    cache.put(1, "x");
    cache.get(&1);
    cache.get(&1); // second hit crosses the threshold
    assert_eq!(cache.metrics().promotions, 1);
    assert_eq!(cache.get(&1), Some("x"));
}

#[test]
fn arc_ghost_hit_triggers_a_capacity_rebalance() {
    let mut cache = ArcCache::new(ArcCacheConfig::with_transform_threshold(2, 100));
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c"); // evicts key 1 from T1 into its ghost list
    assert_eq!(cache.get(&1), None);
    cache.put(1, "a-again"); // hits the ghost list, rebalances capacity
    assert_eq!(cache.metrics().ghost_hits, 1);
    assert_eq!(cache.get(&1), Some("a-again"));
}

#[test]
fn lruk_withholds_admission_after_a_single_observation() {
    let mut cache = LruKCache::new(LruKCacheConfig::new(2, 4, 3));
    cache.put("x", 1);
    assert!(!cache.contains(&"x")); // only observed once so far
}

#[test]
fn lruk_get_can_supply_the_final_observation_that_admits() {
    // A miss on a key still in its admission history is itself an
    // observation: the get below is the 2nd touch and admits "x" directly,
    // returning its pending value rather than None.
    let mut cache = LruKCache::new(LruKCacheConfig::new(2, 4, 2));
    cache.put("x", 1);
    assert_eq!(cache.get(&"x"), Some(1));
    assert!(cache.contains(&"x"));
}

#[test]
fn lruk_admitted_entries_still_evict_under_lru_order() {
    let mut cache = LruKCache::new(LruKCacheConfig::new(1, 4, 1));
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), None); // evicted to make room for "b"
    assert_eq!(cache.get(&"b"), Some(2));
}
