//! Unified cache entry type.
//!
//! Every engine stores its live entries as a `CacheEntry<K, V, M>` inside a
//! [`list`](crate::list) node. The `M` parameter lets each algorithm attach
//! its own bookkeeping (an LFU frequency, an ARC hit counter) without the
//! entry type itself growing algorithm-specific fields. Engines that need no
//! extra state (LRU) use `M = ()`.

/// A cached key/value pair plus algorithm-specific metadata.
///
/// `M` defaults to `()` for engines that derive all ordering from list
/// position alone.
pub(crate) struct CacheEntry<K, V, M = ()> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) metadata: M,
}

impl<K, V, M> CacheEntry<K, V, M> {
    #[inline]
    pub(crate) fn new(key: K, value: V, metadata: M) -> Self {
        Self {
            key,
            value,
            metadata,
        }
    }
}

impl<K: Clone, V: Clone, M: Clone> Clone for CacheEntry<K, V, M> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            metadata: self.metadata.clone(),
        }
    }
}
