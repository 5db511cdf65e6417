//! Algorithm-specific metadata types.
//!
//! Plugged into [`CacheEntry`](crate::entry::CacheEntry)'s `M` parameter so
//! each engine can track exactly the extra state its policy needs.

/// Frequency counter used by the LFU engine and by the ARC frequency-side
/// sub-cache, which is itself LFU-like.
///
/// `freq` is the bucket a node currently lives in; the two must always
/// agree, since aging rebuilds buckets from node frequencies and eviction
/// trusts bucket membership to find the minimum.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LfuMeta {
    pub(crate) freq: u64,
}

impl LfuMeta {
    pub(crate) fn new() -> Self {
        LfuMeta { freq: 1 }
    }
}

/// Per-entry hit counter used by the ARC recency-side (T1) sub-cache to
/// decide when an entry has earned promotion to the frequency side (T2).
///
/// Starts at 0 on insertion; a `put` does not itself count as a hit, only
/// subsequent `get` accesses do.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArcMeta {
    pub(crate) hits: u64,
}

impl ArcMeta {
    pub(crate) fn new() -> Self {
        ArcMeta { hits: 0 }
    }
}
