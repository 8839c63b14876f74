use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::decorator::CacheDecorator;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::CacheError;
use crate::traits::{Cache, Keys};

/// Decorator that measures how long each `get` takes.
///
/// The elapsed wall-clock time of every retrieval, hit or miss, is reported
/// to the sink as [`Diagnostic::Retrieved`]. Results are returned unchanged
/// and every other operation is forwarded as is.
///
/// # Example
///
/// ```
/// use evictkit::decorator::TimingDecorator;
/// use evictkit::policy::lfu::LfuCache;
/// use evictkit::traits::Cache;
///
/// // Reports through `tracing` at DEBUG level
/// let mut cache = TimingDecorator::new(LfuCache::new(8));
/// cache.put("k", 42).unwrap();
/// assert_eq!(cache.get(&"k"), Ok(&42));
/// ```
pub struct TimingDecorator<C> {
    base: CacheDecorator<C>,
    sink: Arc<dyn DiagnosticSink>,
}

impl<C> TimingDecorator<C> {
    /// Wraps `inner`, reporting timings through [`TracingSink`].
    pub fn new(inner: C) -> Self {
        Self::with_sink(inner, Arc::new(TracingSink))
    }

    /// Wraps `inner`, reporting timings to `sink`.
    pub fn with_sink(inner: C, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            base: CacheDecorator::new(inner),
            sink,
        }
    }

    pub fn inner(&self) -> &C {
        self.base.inner()
    }

    pub fn inner_mut(&mut self) -> &mut C {
        self.base.inner_mut()
    }

    pub fn into_inner(self) -> C {
        self.base.into_inner()
    }
}

impl<C: fmt::Debug> fmt::Debug for TimingDecorator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimingDecorator")
            .field("inner", self.base.inner())
            .finish_non_exhaustive()
    }
}

impl<K, V, C> Cache<K, V> for TimingDecorator<C>
where
    K: fmt::Debug,
    C: Cache<K, V>,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        self.base.put(key, value)
    }

    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        let started = Instant::now();
        let result = self.base.get(key);
        let elapsed = started.elapsed();
        self.sink.emit(&Diagnostic::Retrieved {
            key,
            elapsed,
            hit: result.is_ok(),
        });
        result
    }

    #[inline]
    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        self.base.remove(key)
    }

    #[inline]
    fn clear(&mut self) {
        self.base.clear()
    }

    #[inline]
    fn len(&self) -> usize {
        self.base.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.base.capacity()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.base.contains_key(key)
    }

    #[inline]
    fn keys(&self) -> Keys<'_, K> {
        self.base.keys()
    }
}
