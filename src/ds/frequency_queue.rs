//! Frequency-ordered priority queue with rank-indexed removal.
//!
//! An ordered map keyed by [`Rank`] (`frequency`, then a monotonic `tick`)
//! that yields the least-frequent key first. The owner keeps each key's
//! current `Rank`, which acts as the key-to-position index: removing or
//! re-ranking a key is a single `BTreeMap` operation.
//!
//! ## Architecture
//!
//! ```text
//!   ranks: BTreeMap<Rank, K>
//!
//!     (freq=1, tick=4) → "B"   ← first(): next eviction candidate
//!     (freq=1, tick=6) → "C"
//!     (freq=2, tick=5) → "A"
//!     (freq=3, tick=7) → "D"
//!
//!   tick: 8  (advanced on every push/reposition)
//!
//!   reposition((1, 4), 2):
//!     remove (1, 4) → "B"
//!     insert (2, 8) → "B"     ← never two entries for one key
//! ```
//!
//! ## Tie-breaking
//!
//! Equal frequencies are ordered by `tick`, so the key that reached its
//! current frequency earliest leaves first. The order is deterministic for a
//! given operation sequence.
//!
//! ## Operations
//!
//! | Operation     | Description                               | Complexity |
//! |---------------|-------------------------------------------|------------|
//! | `push`        | Insert key with a frequency               | O(log n)   |
//! | `reposition`  | Move a ranked key to a new frequency      | O(log n)   |
//! | `remove`      | Remove the key holding a rank             | O(log n)   |
//! | `pop_min`     | Remove least-frequent key                 | O(log n)   |
//! | `peek_min`    | Inspect least-frequent key                | O(log n)   |
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::ds::FrequencyQueue;
//!
//! let mut queue = FrequencyQueue::new();
//! let a = queue.push("a", 1);
//! queue.push("b", 1);
//!
//! // "a" is read once more
//! queue.reposition(a, 2);
//!
//! assert_eq!(queue.pop_min().map(|(key, _)| key), Some("b"));
//! assert_eq!(queue.pop_min().map(|(key, _)| key), Some("a"));
//! assert!(queue.is_empty());
//! ```

use std::collections::BTreeMap;

/// Position of a key inside a [`FrequencyQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank {
    frequency: u64,
    tick: u64,
}

impl Rank {
    /// Access frequency recorded for this rank.
    pub fn frequency(self) -> u64 {
        self.frequency
    }
}

/// Min-ordered queue of keys by access frequency.
#[derive(Debug)]
pub struct FrequencyQueue<K> {
    ranks: BTreeMap<Rank, K>,
    tick: u64,
}

impl<K> FrequencyQueue<K> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            ranks: BTreeMap::new(),
            tick: 0,
        }
    }

    /// Returns the number of ranked keys.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Returns `true` if no key is ranked.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Ranks `key` at `frequency` and returns its position.
    ///
    /// The caller must not push a key that is already ranked.
    pub fn push(&mut self, key: K, frequency: u64) -> Rank {
        let rank = self.next_rank(frequency);
        self.ranks.insert(rank, key);
        rank
    }

    /// Moves the key at `rank` to `frequency`, returning its new position.
    ///
    /// Returns `None` if nothing is ranked at `rank`.
    pub fn reposition(&mut self, rank: Rank, frequency: u64) -> Option<Rank> {
        let key = self.ranks.remove(&rank)?;
        Some(self.push(key, frequency))
    }

    /// Removes and returns the key ranked at `rank`.
    pub fn remove(&mut self, rank: Rank) -> Option<K> {
        self.ranks.remove(&rank)
    }

    /// Removes and returns the least-frequent key.
    pub fn pop_min(&mut self) -> Option<(K, Rank)> {
        self.ranks.pop_first().map(|(rank, key)| (key, rank))
    }

    /// Returns the least-frequent key without removing it.
    pub fn peek_min(&self) -> Option<(&K, Rank)> {
        self.ranks.first_key_value().map(|(rank, key)| (key, *rank))
    }

    /// Iterates keys from least to most frequent.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.ranks.values()
    }

    /// Iterates `(key, rank)` pairs from least to most frequent.
    pub fn iter_ranked(&self) -> impl Iterator<Item = (&K, Rank)> {
        self.ranks.iter().map(|(rank, key)| (key, *rank))
    }

    /// Removes every key. The tick keeps advancing.
    pub fn clear(&mut self) {
        self.ranks.clear();
    }

    fn next_rank(&mut self, frequency: u64) -> Rank {
        let rank = Rank {
            frequency,
            tick: self.tick,
        };
        self.tick += 1;
        rank
    }
}

impl<K> Default for FrequencyQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
