//! Configuration for the Least Frequently Used (LFU) engine.

/// Configuration for an [`LfuCache`](crate::lfu::LfuCache).
///
/// `max_avg` controls aging: once `total_hits / size` exceeds it, every live
/// entry's frequency is dampened. Lower values age more aggressively.
#[derive(Debug, Clone, Copy)]
pub struct LfuCacheConfig {
    /// Maximum number of live entries.
    pub capacity: usize,
    /// Average-hits-per-entry threshold that triggers a global aging pass.
    pub max_avg: u64,
}

impl LfuCacheConfig {
    /// The default aging threshold used by [`LfuCacheConfig::new`].
    pub const DEFAULT_MAX_AVG: u64 = 10;

    /// Creates a configuration with the default aging threshold.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_avg: Self::DEFAULT_MAX_AVG,
        }
    }

    /// Creates a configuration with an explicit aging threshold.
    pub fn with_max_avg(capacity: usize, max_avg: u64) -> Self {
        Self { capacity, max_avg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_avg() {
        let config = LfuCacheConfig::new(10);
        assert_eq!(config.max_avg, LfuCacheConfig::DEFAULT_MAX_AVG);
    }
}
