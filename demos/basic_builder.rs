//! Example demonstrating the unified CacheBuilder API.
//!
//! Run with: cargo run --example basic_builder

use evictkit::builder::{CacheBuilder, CacheConfig, CachePolicy};
use evictkit::error::CacheError;
use evictkit::traits::Cache;

fn main() -> Result<(), CacheError> {
    println!("=== CacheBuilder Examples ===\n");

    // Example 1: LRU Cache
    println!("1. LRU Cache");
    let mut lru = CacheBuilder::new(3).build::<u64, String>(CachePolicy::Lru)?;

    lru.put(1, "one".to_string())?;
    lru.put(2, "two".to_string())?;
    lru.put(3, "three".to_string())?;

    // Access key 1 to make it MRU
    lru.get(&1)?;

    // Insert key 4, evicts LRU (key 2)
    lru.put(4, "four".to_string())?;

    println!("   contains 1? {} (was accessed)", lru.contains_key(&1));
    println!("   contains 2? {} (evicted as LRU)", lru.contains_key(&2));
    println!("   contains 4? {} (just inserted)", lru.contains_key(&4));
    println!();

    // Example 2: FIFO Cache, chosen by name
    println!("2. FIFO Cache");
    let mut fifo = CacheBuilder::new(3).build_named::<u64, String>("FIFO")?;

    fifo.put(1, "one".to_string())?;
    fifo.put(2, "two".to_string())?;
    fifo.put(3, "three".to_string())?;

    // Access doesn't affect FIFO order
    fifo.get(&1)?;

    // Insert key 4, evicts oldest (key 1)
    fifo.put(4, "four".to_string())?;

    println!("   contains 1? {} (evicted as oldest)", fifo.contains_key(&1));
    println!("   contains 2? {} (still present)", fifo.contains_key(&2));
    println!();

    // Example 3: default configuration
    println!("3. Default config");
    let config = CacheConfig::default();
    let cache = CacheBuilder::from_config::<u64, String>(config)?;
    println!("   policy={} capacity={}", cache.policy(), cache.capacity());
    println!();

    // Example 4: rejected inputs
    println!("4. Errors");
    if let Err(err) = CacheBuilder::new(3).build_named::<u64, String>("mru") {
        println!("   {err}");
    }
    if let Err(err) = CacheBuilder::new(0).build::<u64, String>(CachePolicy::Lfu) {
        println!("   {err}");
    }

    Ok(())
}
