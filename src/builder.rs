//! Unified cache builder for all eviction policies.
//!
//! Picks a policy at runtime (from a [`CachePolicy`] value or its textual
//! name) and returns a [`PolicyCache`] that implements [`Cache`] whatever
//! policy is inside.
//!
//! ## Example
//!
//! ```rust
//! use evictkit::builder::{CacheBuilder, CachePolicy};
//! use evictkit::traits::Cache;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .build::<u64, String>(CachePolicy::Lru)
//!     .unwrap();
//! cache.put(1, "hello".to_string()).unwrap();
//! assert_eq!(cache.get(&1), Ok(&"hello".to_string()));
//!
//! // Policies can also be named
//! let cache = CacheBuilder::new(8).build_named::<u64, u64>("LFU").unwrap();
//! assert_eq!(cache.policy(), CachePolicy::Lfu);
//! ```

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{CacheError, ConfigError, check_capacity};
use crate::policy::fifo::FifoCache;
use crate::policy::lfu::LfuCache;
use crate::policy::lru::LruCache;
use crate::traits::{Cache, Keys};

/// Available cache eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachePolicy {
    /// First In, First Out eviction.
    Fifo,
    /// Least Recently Used eviction.
    Lru,
    /// Least Frequently Used eviction.
    Lfu,
}

impl CachePolicy {
    pub const ALL: [CachePolicy; 3] = [CachePolicy::Fifo, CachePolicy::Lru, CachePolicy::Lfu];

    pub fn as_str(self) -> &'static str {
        match self {
            CachePolicy::Fifo => "fifo",
            CachePolicy::Lru => "lru",
            CachePolicy::Lfu => "lfu",
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CachePolicy {
    type Err = CacheError;

    /// Parses a policy name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CachePolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CacheError::UnsupportedPolicy(s.to_string()))
    }
}

/// Plain construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub capacity: usize,
    pub policy: CachePolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            policy: CachePolicy::Lru,
        }
    }
}

/// Cache whose policy was chosen at runtime.
#[derive(Debug)]
pub enum PolicyCache<K, V>
where
    K: Clone + Eq + Hash,
{
    Fifo(FifoCache<K, V>),
    Lru(LruCache<K, V>),
    Lfu(LfuCache<K, V>),
}

impl<K, V> PolicyCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Returns the policy of the wrapped cache.
    pub fn policy(&self) -> CachePolicy {
        match self {
            PolicyCache::Fifo(_) => CachePolicy::Fifo,
            PolicyCache::Lru(_) => CachePolicy::Lru,
            PolicyCache::Lfu(_) => CachePolicy::Lfu,
        }
    }

    fn as_dyn(&self) -> &dyn Cache<K, V> {
        match self {
            PolicyCache::Fifo(fifo) => fifo,
            PolicyCache::Lru(lru) => lru,
            PolicyCache::Lfu(lfu) => lfu,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn Cache<K, V> {
        match self {
            PolicyCache::Fifo(fifo) => fifo,
            PolicyCache::Lru(lru) => lru,
            PolicyCache::Lfu(lfu) => lfu,
        }
    }
}

impl<K, V> Cache<K, V> for PolicyCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, CacheError> {
        self.as_dyn_mut().put(key, value)
    }

    fn get(&mut self, key: &K) -> Result<&V, CacheError> {
        self.as_dyn_mut().get(key)
    }

    fn remove(&mut self, key: &K) -> Result<V, CacheError> {
        self.as_dyn_mut().remove(key)
    }

    fn clear(&mut self) {
        self.as_dyn_mut().clear()
    }

    fn len(&self) -> usize {
        self.as_dyn().len()
    }

    fn capacity(&self) -> usize {
        self.as_dyn().capacity()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.as_dyn().contains_key(key)
    }

    fn keys(&self) -> Keys<'_, K> {
        self.as_dyn().keys()
    }
}

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity.
    ///
    /// The capacity is validated when the cache is built.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Build straight from a [`CacheConfig`].
    pub fn from_config<K, V>(config: CacheConfig) -> Result<PolicyCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        Self::new(config.capacity).build(config.policy)
    }

    /// Build a cache with the specified policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn build<K, V>(self, policy: CachePolicy) -> Result<PolicyCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        let capacity = check_capacity(self.capacity)?;
        let cache = match policy {
            CachePolicy::Fifo => PolicyCache::Fifo(FifoCache::new(capacity)),
            CachePolicy::Lru => PolicyCache::Lru(LruCache::new(capacity)),
            CachePolicy::Lfu => PolicyCache::Lfu(LfuCache::new(capacity)),
        };
        tracing::debug!(policy = %policy, capacity, "built cache");
        Ok(cache)
    }

    /// Build a cache from a policy name such as `"lru"`.
    ///
    /// # Errors
    ///
    /// [`CacheError::UnsupportedPolicy`] for an unknown name, or
    /// [`CacheError::Config`] if the capacity is zero.
    pub fn build_named<K, V>(self, name: &str) -> Result<PolicyCache<K, V>, CacheError>
    where
        K: Clone + Eq + Hash,
    {
        let policy = name.parse::<CachePolicy>()?;
        Ok(self.build(policy)?)
    }
}
