//! Cache configuration structures.
//!
//! Every engine and wrapper is constructed from a small, explicit config
//! struct rather than a long argument list. This keeps required parameters
//! (capacity) separate from policy knobs that have sensible defaults
//! (`max_avg`, `transform_threshold`), and gives call sites a single,
//! consistent `Engine::new(config)` entry point.

pub mod arc;
pub mod lfu;
pub mod lru;
pub mod lruk;
pub mod shard;

pub use arc::ArcCacheConfig;
pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;
pub use lruk::LruKCacheConfig;
pub use shard::ShardCacheConfig;
