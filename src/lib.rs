//! A generic, in-process, synchronous key-value cache with five composable
//! eviction engines.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Which eviction engine should I use?                  │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                       │
//! │  Plain recency (recent = hot)? ──────────────────────▶ lru::LruCache │
//! │                                                                       │
//! │  Plain frequency, with long-term drift? ─────────────▶ lfu::LfuCache │
//! │                                                                       │
//! │  Workload shifts between the two over time? ─────────▶ arc::ArcCache │
//! │                                                                       │
//! │  Want to filter out one-off keys entirely? ────────▶ lruk::LruKCache │
//! │                                                                       │
//! │  Any of the above, but partitioned for concurrency? ▶ shard::ShardedCache │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every engine shares the same shape: a `new(config)` constructor taking a
//! small struct from [`config`], a `put`/`get` pair with O(1) amortized cost,
//! and a [`metrics::CacheMetrics`] view for observability. None of them
//! track entry size, time-to-live, or persist state across process restarts
//! — this crate is a replacement policy library, not a distributed or
//! durable cache.
//!
//! # Picking an engine generically
//!
//! Code that wants to stay generic over the choice of policy can program
//! against [`engine::CacheEngine`] instead of a concrete engine type; the
//! [`engine::Cache`] enum is a runtime-selectable handle for callers who pick
//! a policy from configuration rather than at compile time.
//!
//! # Example
//!
//! ```
//! use cache_rs::lru::LruCache;
//! use cache_rs::config::LruCacheConfig;
//!
//! let mut cache = LruCache::new(LruCacheConfig::new(128));
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Some(1));
//! ```

mod entry;
mod list;
mod meta;

pub mod arc;
pub mod config;
pub mod engine;
pub mod lfu;
pub mod lru;
pub mod lruk;
pub mod metrics;
pub mod shard;

pub use arc::ArcCache;
pub use engine::{Cache, CacheEngine};
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use lruk::LruKCache;
pub use shard::ShardedCache;
