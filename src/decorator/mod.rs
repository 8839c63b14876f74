//! Cache decorators.
//!
//! A decorator wraps any [`Cache`] and implements [`Cache`] itself, so
//! decorators stack freely and work with every policy:
//!
//! ```text
//!   TimingDecorator ──► CacheDecorator ──► LruCache / FifoCache / LfuCache / ...
//! ```
//!
//! Wrapping by reference works too, since `&mut C` is a [`Cache`] whenever
//! `C` is:
//!
//! ```
//! use evictkit::decorator::CacheDecorator;
//! use evictkit::policy::fifo::FifoCache;
//! use evictkit::traits::Cache;
//!
//! let mut fifo = FifoCache::new(2);
//! {
//!     let mut view = CacheDecorator::new(&mut fifo);
//!     view.put(1, "one").unwrap();
//! }
//! assert_eq!(fifo.len(), 1);
//! ```

mod timing;

pub use timing::TimingDecorator;

use crate::error::CacheError;
use crate::traits::{Cache, Keys};

/// Pass-through decorator.
///
/// Forwards every call to the wrapped cache unchanged and holds no state of
/// its own. Other decorators build on it.
#[derive(Debug, Clone, Default)]
pub struct CacheDecorator<C> {
    inner: C,
}

impl<C> CacheDecorator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<K, V, C> Cache<K, V> for CacheDecorator<C>
where
    C: Cache<K, V>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        self.inner.put(key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        self.inner.get(key)
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        self.inner.remove(key)
    }

    #[inline]
    fn clear(&mut self) {
        self.inner.clear()
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    #[inline]
    fn keys(&self) -> Keys<'_, K> {
        self.inner.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::lfu::LfuCache;
    use crate::policy::lru::LruCache;

    #[test]
    fn forwards_every_operation() {
        let mut cache = CacheDecorator::new(LruCache::new(2));
        assert_eq!(cache.put("a", 1), Ok(None));
        assert_eq!(cache.put("b", 2), Ok(None));
        assert_eq!(cache.get(&"a"), Ok(&1));
        cache.put("c", 3).unwrap();

        // the wrapped policy still decides eviction
        assert!(!cache.contains_key(&"b"));
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(cache.remove(&"a"), Ok(1));
        assert_eq!(cache.get(&"a"), Err(CacheError::KeyNotFound));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.capacity(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn behaves_like_undecorated_cache() {
        let mut plain = LfuCache::new(3);
        let mut wrapped = CacheDecorator::new(LfuCache::new(3));
        for key in [1, 2, 1, 3, 4, 2, 5, 1] {
            if plain.get(&key).is_err() {
                plain.put(key, key).unwrap();
            }
            if wrapped.get(&key).is_err() {
                wrapped.put(key, key).unwrap();
            }
        }
        let plain_keys: Vec<_> = plain.keys().copied().collect();
        let wrapped_keys: Vec<_> = wrapped.keys().copied().collect();
        assert_eq!(plain_keys, wrapped_keys);
    }

    #[test]
    fn accessors_expose_wrapped_cache() {
        let mut cache = CacheDecorator::new(LruCache::new(1));
        cache.inner_mut().put(1, 1).unwrap();
        assert!(cache.inner().contains_key(&1));
        let inner = cache.into_inner();
        assert_eq!(inner.len(), 1);
    }

    #[test]
    fn decorators_nest() {
        let mut cache = CacheDecorator::new(CacheDecorator::new(LruCache::new(1)));
        cache.put(1, 'a').unwrap();
        cache.put(2, 'b').unwrap();
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![2]);
    }
}
