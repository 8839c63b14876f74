//! evictkit: bounded in-memory key-value caches with pluggable eviction.
//!
//! Every cache implements [`traits::Cache`]. Pick a policy directly
//! ([`policy::fifo::FifoCache`], [`policy::lru::LruCache`],
//! [`policy::lfu::LfuCache`]) or at runtime through [`builder::CacheBuilder`];
//! wrap it with [`decorator`]s; or bound an unbounded store with
//! [`adapter::LegacyCacheAdapter`].
//!
//! ```
//! use evictkit::prelude::*;
//!
//! let mut cache = CacheBuilder::new(2).build(CachePolicy::Fifo).unwrap();
//! cache.put("a", 1).unwrap();
//! cache.put("b", 2).unwrap();
//! cache.put("c", 3).unwrap();
//!
//! assert_eq!(cache.get(&"a"), Err(CacheError::KeyNotFound));
//! assert_eq!(cache.get(&"c"), Ok(&3));
//! ```

pub mod adapter;
pub mod builder;
pub mod decorator;
pub mod diagnostics;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod store;
pub mod traits;
