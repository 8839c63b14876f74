//! Error types for the evictkit library.
//!
//! ## Key Components
//!
//! - [`CacheError`]: Returned by cache operations. Misses and adapter
//!   rejections are ordinary, recoverable outcomes; the cache state is never
//!   changed by a failed call.
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (e.g. zero capacity).
//!
//! ## Example Usage
//!
//! ```
//! use evictkit::error::{CacheError, ConfigError};
//! use evictkit::policy::lru::LruCache;
//! use evictkit::traits::Cache;
//!
//! let bad: Result<LruCache<u32, u32>, ConfigError> = LruCache::try_new(0);
//! assert!(bad.is_err());
//!
//! let mut cache: LruCache<u32, &str> = LruCache::new(2);
//! assert_eq!(cache.get(&1), Err(CacheError::KeyNotFound));
//! ```

/// Errors reported by [`Cache`](crate::traits::Cache) operations and the
/// construction entry point.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The requested key is not in the cache.
    #[error("key is not in the cache")]
    KeyNotFound,
    /// A new key was refused because the cache is full and does not evict.
    #[error("cannot add a new key: the cache reached its capacity of {capacity}")]
    CapacityRejected {
        /// Capacity of the refusing cache.
        capacity: usize,
    },
    /// The policy selector does not name a known eviction policy.
    #[error("cache policy `{0}` is not supported")]
    UnsupportedPolicy(String),
    /// Construction parameters were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CacheError {
    /// Returns `true` for [`CacheError::KeyNotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::KeyNotFound)
    }
}

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`FifoCache::try_new`](crate::policy::fifo::FifoCache::try_new) and the
/// [`CacheBuilder`](crate::builder::CacheBuilder). Carries a human-readable
/// description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use evictkit::policy::fifo::FifoCache;
///
/// let err = FifoCache::<u64, u64>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }

    pub(crate) fn zero_capacity() -> Self {
        Self::new("capacity must be > 0")
    }
}

/// Validates a cache capacity.
pub(crate) fn check_capacity(capacity: usize) -> Result<usize, ConfigError> {
    if capacity == 0 {
        Err(ConfigError::zero_capacity())
    } else {
        Ok(capacity)
    }
}
