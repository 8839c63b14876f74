//! Bounded view over an unbounded legacy store.
//!
//! [`LegacyCacheAdapter`] exposes any [`UnboundedStore`] through the
//! [`Cache`] contract. Unlike the eviction policies it never drops an entry to
//! make room: once the store holds `capacity` keys, writes of *new* keys are
//! refused with [`CacheError::CapacityRejected`] until the caller removes
//! something. Updates of keys already present are always accepted.
//!
//! ```text
//!   put(k, v) ──► k present? ──yes──► store.insert ──► Stored
//!                     │
//!                     no
//!                     ▼
//!               len < capacity? ──yes──► store.insert ──► Stored
//!                     │
//!                     no ──► Rejected, store unchanged
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::adapter::LegacyCacheAdapter;
//! use evictkit::error::CacheError;
//! use evictkit::traits::Cache;
//!
//! let mut cache = LegacyCacheAdapter::new(2);
//! cache.put("a", 1).unwrap();
//! cache.put("b", 2).unwrap();
//!
//! assert_eq!(
//!     cache.put("c", 3),
//!     Err(CacheError::CapacityRejected { capacity: 2 })
//! );
//! assert_eq!(cache.put("a", 10), Ok(Some(1)));
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{CacheError, ConfigError, check_capacity};
use crate::store::{HashMapStore, UnboundedStore};
use crate::traits::{Cache, Keys};

/// Capacity-enforcing adapter for an [`UnboundedStore`].
pub struct LegacyCacheAdapter<S> {
    store: S,
    capacity: usize,
    sink: Arc<dyn DiagnosticSink>,
}

impl<K, V> LegacyCacheAdapter<HashMapStore<K, V>>
where
    K: Eq + Hash,
{
    /// Creates an adapter over an empty [`HashMapStore`].
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "LegacyCacheAdapter capacity must be > 0");
        Self {
            store: HashMapStore::new(),
            capacity,
            sink: Arc::new(TracingSink),
        }
    }
}

impl<S> LegacyCacheAdapter<S> {
    /// Wraps an existing store.
    ///
    /// Fails if `capacity` is zero or the store already holds more than
    /// `capacity` entries.
    pub fn try_with_store<K, V>(store: S, capacity: usize) -> Result<Self, ConfigError>
    where
        S: UnboundedStore<K, V>,
    {
        let capacity = check_capacity(capacity)?;
        if store.len() > capacity {
            return Err(ConfigError::new(format!(
                "store holds {} entries, more than capacity {}",
                store.len(),
                capacity
            )));
        }
        Ok(Self {
            store,
            capacity,
            sink: Arc::new(TracingSink),
        })
    }

    /// Replaces the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: fmt::Debug> fmt::Debug for LegacyCacheAdapter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegacyCacheAdapter")
            .field("store", &self.store)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V, S> Cache<K, V> for LegacyCacheAdapter<S>
where
    K: fmt::Debug,
    S: UnboundedStore<K, V>,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        if self.store.len() >= self.capacity && !self.store.contains(&key) {
            self.sink.emit(&Diagnostic::Rejected {
                key: &key,
                capacity: self.capacity,
            });
            return Err(CacheError::CapacityRejected {
                capacity: self.capacity,
            });
        }

        self.sink.emit(&Diagnostic::Stored { key: &key });
        Ok(self.store.insert(key, value))
    }

    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        match self.store.get(key) {
            Some(value) => Ok(value),
            None => {
                self.sink.emit(&Diagnostic::Missed { key });
                Err(CacheError::KeyNotFound)
            }
        }
    }

    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        match self.store.remove(key) {
            Some(value) => Ok(value),
            None => {
                self.sink.emit(&Diagnostic::Missed { key });
                Err(CacheError::KeyNotFound)
            }
        }
    }

    fn clear(&mut self) {
        self.store.clear();
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn contains_key(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn keys(&self) -> Keys<'_, K> {
        self.store.keys()
    }
}
