//! Configuration for the Adaptive Replacement Cache (ARC) engine.

/// Configuration for an [`ArcCache`](crate::arc::ArcCache).
///
/// `transform_threshold` is the number of hits a T1 (recency-side) entry
/// needs before it is promoted to T2 (frequency side).
#[derive(Debug, Clone, Copy)]
pub struct ArcCacheConfig {
    /// Combined live capacity, split adaptively between the recency and
    /// frequency sub-caches.
    pub capacity: usize,
    /// Hits required on the recency side before promotion to the frequency side.
    pub transform_threshold: u64,
}

impl ArcCacheConfig {
    /// The default transform threshold used by [`ArcCacheConfig::new`].
    pub const DEFAULT_TRANSFORM_THRESHOLD: u64 = 2;

    /// Creates a configuration with the default transform threshold.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            transform_threshold: Self::DEFAULT_TRANSFORM_THRESHOLD,
        }
    }

    /// Creates a configuration with an explicit transform threshold.
    pub fn with_transform_threshold(capacity: usize, transform_threshold: u64) -> Self {
        Self {
            capacity,
            transform_threshold,
        }
    }
}
