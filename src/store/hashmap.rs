//! HashMap-backed unbounded store.
//!
//! ## Example Usage
//! ```rust
//! use evictkit::store::{HashMapStore, UnboundedStore};
//!
//! let mut store: HashMapStore<u64, String> = HashMapStore::new();
//! store.insert(1, "a".to_string());
//! assert!(store.contains(&1));
//! assert_eq!(store.insert(1, "b".to_string()).as_deref(), Some("a"));
//! ```
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::store::traits::UnboundedStore;
use crate::traits::Keys;

/// Single-threaded `HashMap` store that grows without bound.
#[derive(Clone)]
pub struct HashMapStore<K, V, S = FxBuildHasher> {
    map: HashMap<K, V, S>,
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashMapStore<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V> HashMapStore<K, V, FxBuildHasher>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(FxBuildHasher)
    }
}

impl<K, V> Default for HashMapStore<K, V, FxBuildHasher>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashMapStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create a store with a custom hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: HashMap::with_hasher(hasher),
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMapStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K, V, S> UnboundedStore<K, V> for HashMapStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn keys(&self) -> Keys<'_, K> {
        Box::new(self.map.keys())
    }
}
