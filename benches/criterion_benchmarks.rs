//! Throughput benchmarks for the eviction engines.
//!
//! Not a substitute for the correctness tests; these exist to catch gross
//! regressions (e.g. an accidental O(n) scan creeping into a hot path)
//! rather than to assert a specific number.

use cache_rs::arc::ArcCache;
use cache_rs::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use cache_rs::lfu::LfuCache;
use cache_rs::lru::LruCache;
use cache_rs::lruk::LruKCache;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CAPACITY: usize = 1_000;
const KEYSPACE: usize = 4_000;

fn bench_lru_put(c: &mut Criterion) {
    c.bench_function("lru_put", |b| {
        let mut cache = LruCache::new(LruCacheConfig::new(CAPACITY));
        let mut i = 0usize;
        b.iter(|| {
            cache.put(black_box(i % KEYSPACE), black_box(i));
            i += 1;
        });
    });
}

fn bench_lru_get_hit(c: &mut Criterion) {
    let mut cache = LruCache::new(LruCacheConfig::new(CAPACITY));
    for i in 0..CAPACITY {
        cache.put(i, i);
    }
    c.bench_function("lru_get_hit", |b| {
        let mut i = 0usize;
        b.iter(|| {
            let key = i % CAPACITY;
            i += 1;
            black_box(cache.get(&key))
        });
    });
}

fn bench_lfu_put(c: &mut Criterion) {
    c.bench_function("lfu_put", |b| {
        let mut cache = LfuCache::new(LfuCacheConfig::new(CAPACITY));
        let mut i = 0usize;
        b.iter(|| {
            cache.put(black_box(i % KEYSPACE), black_box(i));
            i += 1;
        });
    });
}

fn bench_arc_mixed_workload(c: &mut Criterion) {
    c.bench_function("arc_mixed_workload", |b| {
        let mut cache = ArcCache::new(ArcCacheConfig::new(CAPACITY));
        let mut i = 0usize;
        b.iter(|| {
            let key = i % KEYSPACE;
            cache.put(key, i);
            black_box(cache.get(&key));
            i += 1;
        });
    });
}

fn bench_lruk_admission_churn(c: &mut Criterion) {
    c.bench_function("lruk_admission_churn", |b| {
        let mut cache = LruKCache::new(LruKCacheConfig::new(CAPACITY, CAPACITY * 2, 2));
        let mut i = 0usize;
        b.iter(|| {
            let key = i % KEYSPACE;
            cache.put(key, i);
            i += 1;
        });
    });
}

criterion_group!(
    benches,
    bench_lru_put,
    bench_lru_get_hit,
    bench_lfu_put,
    bench_arc_mixed_workload,
    bench_lruk_admission_churn,
);
criterion_main!(benches);
