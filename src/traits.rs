//! # Cache Contract
//!
//! This module defines [`Cache`], the single capability every cache in the
//! crate satisfies: the three eviction policies, the decorators that wrap
//! them, and the adapter over unbounded stores.
//!
//! ## Architecture
//!
//! ```text
//!                          ┌─────────────────────────────────────────┐
//!                          │              Cache<K, V>                │
//!                          │                                         │
//!                          │  put(&mut, K, V) → Result<Option<V>>    │
//!                          │  get(&mut, &K) → Result<&V>             │
//!                          │  remove(&mut, &K) → Result<V>           │
//!                          │  clear(&mut)                            │
//!                          │  contains_key(&, &K) → bool             │
//!                          │  len(&) / is_empty(&) / capacity(&)     │
//!                          │  keys(&) → Keys<'_, K>                  │
//!                          └──────────────────┬──────────────────────┘
//!                                             │
//!        ┌──────────────┬─────────────┬───────┴──────┬──────────────────────┐
//!        ▼              ▼             ▼              ▼                      ▼
//!   FifoCache       LruCache      LfuCache     CacheDecorator<C>    LegacyCacheAdapter<S>
//!                                              TimingDecorator<C>
//! ```
//!
//! ## Policy Comparison
//!
//! | Policy | Eviction Basis               | Reads reorder? | Full cache on new key |
//! |--------|------------------------------|----------------|-----------------------|
//! | FIFO   | Oldest insert / last update  | No             | Evicts one            |
//! | LRU    | Last read or write           | Yes            | Evicts one            |
//! | LFU    | Lowest access frequency      | Yes (count)    | Evicts one            |
//! | Legacy | None                         | No             | Rejects the write     |
//!
//! ## Misses
//!
//! `get` and `remove` report an absent key with
//! [`CacheError::KeyNotFound`]. A miss never changes the cache. Policies
//! report misses only through that error; wrap one in a
//! [`TimingDecorator`](crate::decorator::TimingDecorator) to also send them
//! to a [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).
//!
//! ## Thread Safety
//!
//! Caches are **not** thread-safe. Mutating calls take `&mut self`, so a
//! policy's map and ordering structure are always updated together before
//! any other caller can observe them. Wrap a cache in a mutex to share it.

use crate::error::CacheError;

/// Iterator over the keys of a cache, in the cache's internal order.
pub type Keys<'a, K> = Box<dyn Iterator<Item = &'a K> + 'a>;

/// Bounded key-value cache.
///
/// # Example
///
/// ```
/// use evictkit::policy::lru::LruCache;
/// use evictkit::traits::Cache;
///
/// fn warm_cache<C: Cache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         let _ = cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait Cache<K, V> {
    /// Inserts or updates `key`, returning the previous value if it existed.
    ///
    /// Updating an existing key counts as a fresh touch for the policy. When
    /// a new key arrives and the cache is full, exactly one entry is evicted
    /// first. Evicting caches never return `Err`.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::policy::fifo::FifoCache;
    /// use evictkit::traits::Cache;
    ///
    /// let mut cache = FifoCache::new(10);
    /// assert_eq!(cache.put(1, "first"), Ok(None));
    /// assert_eq!(cache.put(1, "second"), Ok(Some("first")));
    /// ```
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError>;

    /// Returns the value for `key`.
    ///
    /// May update recency or frequency depending on the policy. Use
    /// [`contains_key`](Self::contains_key) to test membership without
    /// affecting eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::error::CacheError;
    /// use evictkit::policy::lfu::LfuCache;
    /// use evictkit::traits::Cache;
    ///
    /// let mut cache = LfuCache::new(10);
    /// cache.put(1, "value").unwrap();
    ///
    /// assert_eq!(cache.get(&1), Ok(&"value"));
    /// assert_eq!(cache.get(&99), Err(CacheError::KeyNotFound));
    /// ```
    fn get(&mut self, key: &K) -> Result<&V, CacheError>;

    /// Removes `key` and all policy bookkeeping for it.
    fn remove(&mut self, key: &K) -> Result<V, CacheError>;

    /// Removes all entries.
    fn clear(&mut self);

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Checks membership without touching recency or frequency.
    fn contains_key(&self, key: &K) -> bool;

    /// Iterates keys in the cache's internal order.
    fn keys(&self) -> Keys<'_, K>;
}

impl<K, V, C> Cache<K, V> for &mut C
where
    C: Cache<K, V> + ?Sized,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        (**self).put(key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        (**self).get(key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        (**self).remove(key)
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        (**self).contains_key(key)
    }

    #[inline]
    fn keys(&self) -> Keys<'_, K> {
        (**self).keys()
    }
}

impl<K, V, C> Cache<K, V> for Box<C>
where
    C: Cache<K, V> + ?Sized,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        (**self).put(key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        (**self).get(key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        (**self).remove(key)
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        (**self).contains_key(key)
    }

    #[inline]
    fn keys(&self) -> Keys<'_, K> {
        (**self).keys()
    }
}
