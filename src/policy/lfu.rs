//! # LFU Cache Implementation
//!
//! Evicts the entry with the lowest access frequency. A key starts at
//! frequency 1 and gains 1 on every successful `get` and every update `put`.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────────┐
//!   │                           LfuCache<K, V>                                 │
//!   │                                                                          │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │  items: FxHashMap<K, LfuSlot<K, V>>                                │ │
//!   │   │                                                                    │ │
//!   │   │  ┌─────────┬───────────────────────────────┬──────────────────┐    │ │
//!   │   │  │   Key   │  CacheItem (key, value, freq) │  Rank            │    │ │
//!   │   │  ├─────────┼───────────────────────────────┼──────────────────┤    │ │
//!   │   │  │  key1   │  (key1, 6, 2)                 │  (2, tick 1)     │    │ │
//!   │   │  │  key2   │  (key2, 2, 1)                 │  (1, tick 2)     │    │ │
//!   │   │  │  key3   │  (key3, 3, 2)                 │  (2, tick 4)     │    │ │
//!   │   │  └─────────┴───────────────────────────────┴──────────────────┘    │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   │                                                                          │
//!   │   ┌────────────────────────────────────────────────────────────────────┐ │
//!   │   │  queue: FrequencyQueue<K>     (ordered by frequency, then tick)    │ │
//!   │   │                                                                    │ │
//!   │   │    (1, 2) → key2   ← next eviction                                 │ │
//!   │   │    (2, 1) → key1                                                   │ │
//!   │   │    (2, 4) → key3                                                   │ │
//!   │   └────────────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each slot remembers its `Rank`, so a frequency change removes exactly one
//! queue entry and inserts one: the queue never holds two entries for a key.
//!
//! ## Tie-breaking
//!
//! Among keys with the same frequency, the one that reached that frequency
//! first is evicted first.
//!
//! ## Operations
//!
//! | Method           | Complexity | Description                              |
//! |------------------|------------|------------------------------------------|
//! | `put`            | O(log n)   | Insert (freq 1) or update (freq + 1)     |
//! | `get`            | O(log n)   | Read, freq + 1                           |
//! | `remove`         | O(log n)   | Drop item and its queue entry            |
//! | `contains_key`   | O(1)       | No frequency change                      |
//! | `frequency`      | O(1)       | Current frequency of a key               |
//! | `peek_lfu`       | O(log n)   | Next eviction candidate                  |
//! | `pop_lfu`        | O(log n)   | Remove the next eviction candidate       |
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::policy::lfu::LfuCache;
//! use evictkit::traits::Cache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("a", 1).unwrap();
//! cache.put("b", 2).unwrap();
//! cache.get(&"a").unwrap();
//!
//! assert_eq!(cache.frequency(&"a"), Some(2));
//! assert_eq!(cache.frequency(&"b"), Some(1));
//!
//! cache.put("c", 3).unwrap();
//! assert!(!cache.contains_key(&"b"));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{FrequencyQueue, Rank};
use crate::error::{CacheError, ConfigError, check_capacity};
use crate::traits::{Cache, Keys};

/// A cached value together with its key and access frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheItem<K, V> {
    key: K,
    value: V,
    frequency: u64,
}

impl<K, V> CacheItem<K, V> {
    /// Creates an item at frequency 1.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            frequency: 1,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Records one access and returns the new frequency.
    pub fn touch(&mut self) -> u64 {
        self.frequency = self.frequency.saturating_add(1);
        self.frequency
    }

    /// Stores `value`, records one access, and returns the old value.
    pub fn replace(&mut self, value: V) -> V {
        self.touch();
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[derive(Debug)]
struct LfuSlot<K, V> {
    item: CacheItem<K, V>,
    rank: Rank,
}

/// Least-frequently-used cache.
#[derive(Debug)]
pub struct LfuCache<K, V>
where
    K: Clone + Eq + Hash,
{
    items: FxHashMap<K, LfuSlot<K, V>>,
    queue: FrequencyQueue<K>,
    capacity: usize,
}

impl<K, V> LfuCache<K, V>
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
        assert!(capacity > 0, "LfuCache capacity must be > 0");
        Self::with_valid_capacity(capacity)
    }

    /// Creates a cache, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        check_capacity(capacity).map(Self::with_valid_capacity)
    }

    fn with_valid_capacity(capacity: usize) -> Self {
        Self {
            items: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            queue: FrequencyQueue::new(),
            capacity,
        }
    }

    /// Returns the current frequency of `key` without changing it.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.items.get(key).map(|slot| slot.item.frequency())
    }

    /// Returns the cached item for `key` without changing its frequency.
    pub fn item(&self, key: &K) -> Option<&CacheItem<K, V>> {
        self.items.get(key).map(|slot| &slot.item)
    }

    /// Returns the next eviction candidate without removing it.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        let (key, _) = self.queue.peek_min()?;
        self.items
            .get(key)
            .map(|slot| (slot.item.key(), slot.item.value()))
    }

    /// Removes and returns the least frequently used entry.
    pub fn pop_lfu(&mut self) -> Option<(K, V)> {
        let (key, _) = self.queue.pop_min()?;
        self.items.remove(&key).map(|slot| slot.item.into_parts())
    }

    /// Moves `slot` to its item's current frequency in the queue.
    fn rerank(queue: &mut FrequencyQueue<K>, slot: &mut LfuSlot<K, V>) {
        if let Some(rank) = queue.reposition(slot.rank, slot.item.frequency()) {
            slot.rank = rank;
        } else {
            debug_assert!(false, "LFU item has no queue entry");
        }
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.items.len() <= self.capacity);
        assert_eq!(self.items.len(), self.queue.len());
        for (key, rank) in self.queue.iter_ranked() {
            let slot = self.items.get(key).expect("ranked key missing from items");
            assert_eq!(slot.rank, rank);
            assert_eq!(slot.item.frequency(), rank.frequency());
            assert!(slot.item.key() == key);
        }
    }
}

impl<K, V> Cache<K, V> for LfuCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        if let Some(slot) = self.items.get_mut(&key) {
            let previous = slot.item.replace(value);
            Self::rerank(&mut self.queue, slot);
            return Ok(Some(previous));
        }

        if self.items.len() >= self.capacity && self.pop_lfu().is_some() {
            tracing::trace!(
                target: "evictkit::lfu",
                len = self.items.len(),
                capacity = self.capacity,
                "evicted least frequently used entry"
            );
        }

        let item = CacheItem::new(key.clone(), value);
        let rank = self.queue.push(key.clone(), item.frequency());
        self.items.insert(key, LfuSlot { item, rank });
        Ok(None)
    }

    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        let slot = self.items.get_mut(key).ok_or(CacheError::KeyNotFound)?;
        slot.item.touch();
        Self::rerank(&mut self.queue, slot);
        Ok(slot.item.value())
    }

    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        let slot = self.items.remove(key).ok_or(CacheError::KeyNotFound)?;
        self.queue.remove(slot.rank);
        Ok(slot.item.into_parts().1)
    }

    fn clear(&mut self) {
        self.items.clear();
        self.queue.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    fn keys(&self) -> Keys<'_, K> {
        Box::new(self.queue.iter())
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Capacity and queue/map agreement hold under mixed traffic.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_invariants_after_ops(
            capacity in 1usize..16,
            ops in prop::collection::vec((0u8..3, 0u8..32), 0..200)
        ) {
            let mut cache = LfuCache::new(capacity);
            for (kind, key) in ops {
                match kind {
                    0 => {
                        cache.put(key, u32::from(key)).unwrap();
                        prop_assert!(cache.contains_key(&key));
                    }
                    1 => {
                        let _ = cache.get(&key);
                    }
                    _ => {
                        let _ = cache.remove(&key);
                    }
                }
                prop_assert!(cache.len() <= cache.capacity());
            }
            cache.debug_validate_invariants();
        }

        /// The evicted key always has the minimum frequency.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_evicts_a_minimum_frequency_key(
            capacity in 1usize..8,
            reads in prop::collection::vec(0u8..8, 0..64)
        ) {
            let mut cache = LfuCache::new(capacity);
            for key in 0..capacity as u8 {
                cache.put(key, ()).unwrap();
            }
            for key in reads {
                let _ = cache.get(&key);
            }
            let min = (0..capacity as u8)
                .filter_map(|k| cache.frequency(&k))
                .min()
                .unwrap();
            let victim = *cache.peek_lfu().unwrap().0;
            prop_assert_eq!(cache.frequency(&victim), Some(min));

            cache.put(200, ()).unwrap();
            prop_assert!(!cache.contains_key(&victim));
        }
    }
}
