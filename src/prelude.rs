pub use crate::adapter::LegacyCacheAdapter;
pub use crate::builder::{CacheBuilder, CacheConfig, CachePolicy, PolicyCache};
pub use crate::decorator::{CacheDecorator, TimingDecorator};
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink, RecordingSink, TracingSink};
pub use crate::error::{CacheError, ConfigError};
pub use crate::policy::fifo::FifoCache;
pub use crate::policy::lfu::{CacheItem, LfuCache};
pub use crate::policy::lru::LruCache;
pub use crate::store::{HashMapStore, UnboundedStore};
pub use crate::traits::Cache;
