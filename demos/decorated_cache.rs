//! Stacking decorators and the legacy adapter.
//!
//! Run with: cargo run --example decorated_cache

use std::sync::Arc;

use evictkit::adapter::LegacyCacheAdapter;
use evictkit::decorator::{CacheDecorator, TimingDecorator};
use evictkit::diagnostics::RecordingSink;
use evictkit::error::CacheError;
use evictkit::policy::lru::LruCache;
use evictkit::traits::Cache;
use tracing::Level;

fn main() -> Result<(), CacheError> {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    // Timing reported through tracing (the default sink)
    let mut cache = TimingDecorator::new(CacheDecorator::new(LruCache::new(2)));
    cache.put("a", 1)?;
    cache.put("b", 2)?;
    cache.get(&"a")?;
    cache.put("c", 3)?;
    let _ = cache.get(&"b");

    // Timing captured in memory
    let sink = Arc::new(RecordingSink::new());
    let mut recorded = TimingDecorator::with_sink(LruCache::new(2), sink.clone());
    recorded.put(1, "one")?;
    recorded.get(&1)?;
    for message in sink.take() {
        println!("recorded: {message}");
    }

    // The legacy adapter refuses new keys once full
    let mut legacy = LegacyCacheAdapter::new(2);
    legacy.put("x", 1)?;
    legacy.put("y", 2)?;
    if let Err(err) = legacy.put("z", 3) {
        println!("legacy: {err}");
    }
    println!("legacy update: {:?}", legacy.put("x", 10)?);

    Ok(())
}
