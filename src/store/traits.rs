//! Storage contract for unbounded key-value backends.
//!
//! A store owns its entries and enforces no capacity of its own. Bounding is
//! the job of whatever wraps it (see [`crate::adapter::LegacyCacheAdapter`]).

use crate::traits::Keys;

/// Key-value storage with no size limit and no eviction.
pub trait UnboundedStore<K, V> {
    /// Fetch a value by key.
    fn get(&self, key: &K) -> Option<&V>;

    /// Insert or update a value. Returns the previous value if present.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Remove a value by key.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Check if a key exists.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Current number of entries.
    fn len(&self) -> usize;

    /// Check if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries.
    fn clear(&mut self);

    /// Iterate over stored keys in unspecified order.
    fn keys(&self) -> Keys<'_, K>;
}
