//! # LRU Cache Implementation
//!
//! Evicts the entry that was least recently read or written. This is the one
//! policy where reads change the eviction order.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         LruCache<K, V>                               │
//!   │                                                                      │
//!   │   map: FxHashMap<K, LruEntry<V>>         order: IntrusiveList<K>     │
//!   │                                                                      │
//!   │      head ─► [key2] ◄──► [key3] ◄──► [key1] ◄── tail                 │
//!   │              (LRU)                   (MRU)                           │
//!   │                                                                      │
//!   │   get(key1) / put(key1, _)  → key1 moves to tail                     │
//!   │   put(new) when full        → head is evicted                        │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Operation       | Complexity | Notes                                   |
//! |-----------------|------------|-----------------------------------------|
//! | `put`           | O(1)       | Insert/update marks the key MRU         |
//! | `get`           | O(1)       | Hit marks the key MRU                   |
//! | `touch`         | O(1)       | Marks MRU without reading               |
//! | `remove`        | O(1)       |                                         |
//! | `contains_key`  | O(1)       | No reordering                           |
//! | `peek_lru`      | O(1)       | No reordering                           |
//! | `pop_lru`       | O(1)       |                                         |
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::policy::lru::LruCache;
//! use evictkit::traits::Cache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1).unwrap();
//! cache.put("b", 2).unwrap();
//!
//! // Reading "a" protects it
//! cache.get(&"a").unwrap();
//! cache.put("c", 3).unwrap();
//!
//! assert!(cache.contains_key(&"a"));
//! assert!(!cache.contains_key(&"b"));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{IntrusiveList, SlotId};
use crate::error::{CacheError, ConfigError, check_capacity};
use crate::traits::{Cache, Keys};

#[derive(Debug)]
struct LruEntry<V> {
    value: V,
    slot: SlotId,
}

/// Least-recently-used cache.
#[derive(Debug)]
pub struct LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    map: FxHashMap<K, LruEntry<V>>,
    /// Keys from least (front) to most (back) recently used
    order: IntrusiveList<K>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "LruCache capacity must be > 0");
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

    /// Marks `key` as most recently used without reading it.
    ///
    /// Returns `false` if the key is absent.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.map.get(key) {
            Some(entry) => self.order.move_to_back(entry.slot),
            None => false,
        }
    }

    /// Returns the least recently used entry without reordering.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let key = self.order.front()?;
        self.map.get(key).map(|entry| (key, &entry.value))
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_front()?;
        let entry = self.map.remove(&key)?;
        Some((key, entry.value))
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

impl<K, V> Cache<K, V> for LruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        if let Some(entry) = self.map.get_mut(&key) {
            let previous = std::mem::replace(&mut entry.value, value);
            self.order.move_to_back(entry.slot);
            return Ok(Some(previous));
        }

        if self.map.len() >= self.capacity && self.pop_lru().is_some() {
            tracing::trace!(
                target: "evictkit::lru",
                len = self.map.len(),
                capacity = self.capacity,
                "evicted least recently used entry"
            );
        }

        let slot = self.order.push_back(key.clone());
        self.map.insert(key, LruEntry { value, slot });
        Ok(None)
    }

    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        let entry = self.map.get(key).ok_or(CacheError::KeyNotFound)?;
        self.order.move_to_back(entry.slot);
        Ok(&entry.value)
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

    #[test]
    fn read_refresh_protects_key() {
        let mut cache = LruCache::new(3);
        cache.put("key1", 1).unwrap();
        cache.put("key2", 2).unwrap();
        cache.put("key3", 3).unwrap();
        cache.get(&"key1").unwrap();
        cache.put("key4", 10).unwrap();

        assert_eq!(cache.get(&"key1"), Ok(&1));
        assert_eq!(cache.get(&"key3"), Ok(&3));
        assert_eq!(cache.get(&"key4"), Ok(&10));
        assert_eq!(cache.get(&"key2"), Err(CacheError::KeyNotFound));
        cache.debug_validate_invariants();
    }

    #[test]
    fn update_counts_as_use() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();
        assert_eq!(cache.put("a", 10), Ok(Some(1)));
        cache.put("c", 3).unwrap();

        assert!(cache.contains_key(&"a"));
        assert!(!cache.contains_key(&"b"));
    }

    #[test]
    fn contains_key_does_not_refresh() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();
        assert!(cache.contains_key(&"a"));
        cache.put("c", 3).unwrap();
        assert!(!cache.contains_key(&"a"));
    }

    #[test]
    fn miss_leaves_order_unchanged() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1).unwrap();
        cache.put(2, 2).unwrap();
        assert!(cache.get(&3).is_err());
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn touch_peek_pop() {
        let mut cache = LruCache::new(3);
        cache.put(1, "one").unwrap();
        cache.put(2, "two").unwrap();
        cache.put(3, "three").unwrap();

        assert!(cache.touch(&1));
        assert!(!cache.touch(&9));
        assert_eq!(cache.peek_lru(), Some((&2, &"two")));
        assert_eq!(cache.pop_lru(), Some((2, "two")));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![3, 1]);
        cache.debug_validate_invariants();
    }

    #[test]
    fn remove_and_clear() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1).unwrap();
        cache.put(2, 2).unwrap();
        assert_eq!(cache.remove(&1), Ok(1));
        assert_eq!(cache.remove(&1), Err(CacheError::KeyNotFound));
        assert_eq!(cache.len(), 1);

        cache.clear();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.peek_lru(), None);
    }

    #[test]
    fn try_new_rejects_zero_capacity() {
        assert!(LruCache::<u8, u8>::try_new(0).is_err());
    }
}
