//! Configuration for the LRU-K admission wrapper.

/// Configuration for an [`LruKCache`](crate::lruk::LruKCache).
///
/// A key is admitted into the `main_capacity`-sized main cache only after it
/// has been observed `k` times within a `history_capacity`-sized recency
/// history of keys not yet admitted.
#[derive(Debug, Clone, Copy)]
pub struct LruKCacheConfig {
    /// Capacity of the main (promoted) cache.
    pub main_capacity: usize,
    /// Capacity of the auxiliary history of not-yet-admitted keys.
    pub history_capacity: usize,
    /// Number of observations required before admission.
    pub k: u64,
}

impl LruKCacheConfig {
    /// Creates a new configuration.
    pub fn new(main_capacity: usize, history_capacity: usize, k: u64) -> Self {
        Self {
            main_capacity,
            history_capacity,
            k,
        }
    }
}
