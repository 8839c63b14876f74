//! # FIFO Cache Implementation
//!
//! Evicts the entry that was inserted or last written the longest time ago.
//! Reads never reorder entries.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        FifoCache<K, V>                               │
//!   │                                                                      │
//!   │   map: FxHashMap<K, FifoEntry<V>>        order: IntrusiveList<K>     │
//!   │   ┌─────────┬──────────────────┐                                     │
//!   │   │  key1   │ value, slot ─────┼──►  head ─► [key2] ◄──► [key3] ◄──► [key1] ◄── tail
//!   │   │  key2   │ value, slot      │        (evicted next)       (last written)
//!   │   │  key3   │ value, slot      │                                     │
//!   │   └─────────┴──────────────────┘                                     │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Order, Not Insertion Order
//!
//! Updating an existing key moves it to the newest end, so the eviction
//! candidate is the key that has gone longest without a write:
//!
//! ```text
//!   put(key1) put(key2) put(key3)   order: key1, key2, key3
//!   put(key1, new value)            order: key2, key3, key1
//!   put(key4)  (full)               evict key2 → key3, key1, key4
//! ```
//!
//! ## Operations
//!
//! | Operation       | Complexity | Notes                                   |
//! |-----------------|------------|-----------------------------------------|
//! | `put`           | O(1)       | Evicts exactly one entry when full      |
//! | `get`           | O(1)       | No reordering                           |
//! | `remove`        | O(1)       | Slot handle unlinks the list node       |
//! | `contains_key`  | O(1)       |                                         |
//! | `peek_oldest`   | O(1)       |                                         |
//! | `pop_oldest`    | O(1)       |                                         |
//! | `clear`         | O(n)       |                                         |
//!
//! ## Thread Safety
//!
//! `FifoCache` is **not** thread-safe; wrap it in a mutex for shared use.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{IntrusiveList, SlotId};
use crate::error::{CacheError, ConfigError, check_capacity};
use crate::traits::{Cache, Keys};

#[derive(Debug)]
struct FifoEntry<V> {
    value: V,
    slot: SlotId,
}

/// First-in-first-out cache ordered by last write.
///
/// # Example
///
/// ```
/// use evictkit::policy::fifo::FifoCache;
/// use evictkit::traits::Cache;
///
/// let mut cache = FifoCache::new(2);
/// cache.put("a", 1).unwrap();
/// cache.put("b", 2).unwrap();
///
/// // Reads do not protect "a"
/// cache.get(&"a").unwrap();
/// cache.put("c", 3).unwrap();
///
/// assert!(!cache.contains_key(&"a"));
/// assert!(cache.contains_key(&"b"));
/// ```
#[derive(Debug)]
pub struct FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Key to value plus the key's node in `order`
    map: FxHashMap<K, FifoEntry<V>>,
    /// Keys from oldest write (front) to newest (back)
    order: IntrusiveList<K>,
    capacity: usize,
}

impl<K, V> FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`try_new`](Self::try_new) for
    /// user-supplied capacities.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::policy::fifo::FifoCache;
    /// use evictkit::traits::Cache;
    ///
    /// let cache: FifoCache<String, i32> = FifoCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "FifoCache capacity must be > 0");
        Self::with_valid_capacity(capacity)
    }

    /// Creates a cache, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        check_capacity(capacity).map(Self::with_valid_capacity)
    }

    fn with_valid_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the next eviction candidate without removing it.
    ///
    /// # Example
    ///
    /// ```
    /// use evictkit::policy::fifo::FifoCache;
    /// use evictkit::traits::Cache;
    ///
    /// let mut cache = FifoCache::new(3);
    /// cache.put(1, "one").unwrap();
    /// cache.put(2, "two").unwrap();
    /// cache.put(1, "uno").unwrap();
    ///
    /// assert_eq!(cache.peek_oldest(), Some((&2, &"two")));
    /// ```
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        let key = self.order.front()?;
        self.map.get(key).map(|entry| (key, &entry.value))
    }

    /// Removes and returns the entry with the oldest write.
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_front()?;
        let entry = self.map.remove(&key)?;
        Some((key, entry.value))
    }

    fn evict_oldest(&mut self) {
        if self.pop_oldest().is_some() {
            tracing::trace!(
                target: "evictkit::fifo",
                len = self.map.len(),
                capacity = self.capacity,
                "evicted oldest entry"
            );
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.map.len() <= self.capacity);
        assert_eq!(self.map.len(), self.order.len());
        for key in self.order.iter() {
            let entry = self.map.get(key).expect("ordered key missing from map");
            assert!(self.order.get(entry.slot) == Some(key));
        }
        self.order.debug_validate_invariants();
    }
}

impl<K, V> Cache<K, V> for FifoCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        if let Some(entry) = self.map.get_mut(&key) {
            let previous = std::mem::replace(&mut entry.value, value);
            self.order.move_to_back(entry.slot);
            return Ok(Some(previous));
        }

        if self.map.len() >= self.capacity {
            self.evict_oldest();
        }

        let slot = self.order.push_back(key.clone());
        self.map.insert(key, FifoEntry { value, slot });
        Ok(None)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        self.map
            .get(key)
            .map(|entry| &entry.value)
            .ok_or(CacheError::KeyNotFound)
    }

    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        let entry = self.map.remove(key).ok_or(CacheError::KeyNotFound)?;
        self.order.remove(entry.slot);
        Ok(entry.value)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn keys(&self) -> Keys<'_, K> {
        Box::new(self.order.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_of<V>(cache: &FifoCache<&'static str, V>) -> Vec<&'static str> {
        cache.keys().copied().collect()
    }

    #[test]
    fn evicts_oldest_write_after_update() {
        let mut cache = FifoCache::new(3);
        cache.put("key1", 1).unwrap();
        cache.put("key2", 2).unwrap();
        cache.put("key3", 3).unwrap();
        cache.put("key1", 6).unwrap();
        cache.put("key4", 10).unwrap();

        assert_eq!(cache.get(&"key2"), Err(CacheError::KeyNotFound));
        assert_eq!(cache.get(&"key1"), Ok(&6));
        assert_eq!(cache.get(&"key3"), Ok(&3));
        assert_eq!(cache.get(&"key4"), Ok(&10));
        cache.debug_validate_invariants();
    }

    #[test]
    fn two_updates_push_untouched_key_to_front() {
        let mut cache = FifoCache::new(3);
        cache.put("key1", 1).unwrap();
        cache.put("key2", 2).unwrap();
        cache.put("key3", 3).unwrap();
        cache.put("key1", 6).unwrap();
        cache.put("key2", 5).unwrap();
        assert_eq!(keys_of(&cache), vec!["key3", "key1", "key2"]);

        cache.put("key4", 10).unwrap();
        assert_eq!(cache.get(&"key1"), Ok(&6));
        assert_eq!(cache.get(&"key2"), Ok(&5));
        assert_eq!(cache.get(&"key4"), Ok(&10));
        assert!(!cache.contains_key(&"key3"));
    }

    #[test]
    fn reads_do_not_reorder() {
        let mut cache = FifoCache::new(2);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();
        for _ in 0..5 {
            cache.get(&"a").unwrap();
        }
        cache.put("c", 3).unwrap();
        assert_eq!(keys_of(&cache), vec!["b", "c"]);
    }

    #[test]
    fn update_returns_previous_and_keeps_len() {
        let mut cache = FifoCache::new(2);
        assert_eq!(cache.put("a", 1), Ok(None));
        assert_eq!(cache.put("a", 2), Ok(Some(1)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn exactly_one_eviction_per_new_key() {
        let mut cache = FifoCache::new(3);
        for i in 0..3 {
            cache.put(i, i).unwrap();
        }
        cache.put(3, 3).unwrap();
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key(&0));
        assert!(cache.contains_key(&1));
    }

    #[test]
    fn remove_unlinks_order() {
        let mut cache = FifoCache::new(3);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();
        cache.put("c", 3).unwrap();

        assert_eq!(cache.remove(&"b"), Ok(2));
        assert_eq!(cache.remove(&"b"), Err(CacheError::KeyNotFound));
        assert_eq!(keys_of(&cache), vec!["a", "c"]);

        cache.put("d", 4).unwrap();
        assert_eq!(cache.len(), 3);
        assert!(cache.contains_key(&"a"));
        cache.debug_validate_invariants();
    }

    #[test]
    fn peek_and_pop_oldest() {
        let mut cache = FifoCache::new(2);
        assert_eq!(cache.peek_oldest(), None);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();

        assert_eq!(cache.peek_oldest(), Some((&"a", &1)));
        assert_eq!(cache.pop_oldest(), Some(("a", 1)));
        assert_eq!(cache.pop_oldest(), Some(("b", 2)));
        assert_eq!(cache.pop_oldest(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cache = FifoCache::new(2);
        cache.put(1, 1).unwrap();
        cache.clear();
        assert_eq!(cache.len(), 0);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.keys().count(), 0);
    }

    #[test]
    fn try_new_rejects_zero_capacity() {
        assert!(FifoCache::<u8, u8>::try_new(0).is_err());
        assert_eq!(FifoCache::<u8, u8>::try_new(1).map(|c| c.capacity()), Ok(1));
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn new_panics_on_zero_capacity() {
        let _ = FifoCache::<u8, u8>::new(0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// len() never exceeds capacity.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_len_within_capacity(
            capacity in 1usize..64,
            ops in prop::collection::vec((0u32..128, 0u32..100), 0..256)
        ) {
            let mut cache = FifoCache::new(capacity);
            for (key, value) in ops {
                cache.put(key, value).unwrap();
                prop_assert!(cache.len() <= cache.capacity());
                prop_assert!(cache.contains_key(&key));
            }
            cache.debug_validate_invariants();
        }

        /// Keys iterate in last-write order.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_keys_follow_last_write(
            keys in prop::collection::vec(0u32..16, 1..64)
        ) {
            let mut cache = FifoCache::new(64);
            let mut expected: Vec<u32> = Vec::new();
            for key in keys {
                cache.put(key, ()).unwrap();
                expected.retain(|k| *k != key);
                expected.push(key);
            }
            let actual: Vec<u32> = cache.keys().copied().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
