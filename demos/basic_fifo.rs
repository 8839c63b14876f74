use evictkit::error::CacheError;
use evictkit::policy::fifo::FifoCache;
use evictkit::traits::Cache;

fn main() -> Result<(), CacheError> {
    let mut cache: FifoCache<&str, i32> = FifoCache::new(3);

    cache.put("key1", 1)?;
    cache.put("key2", 2)?;
    cache.put("key3", 3)?;

    // Reads never reorder a FIFO cache
    cache.get(&"key1")?;
    cache.put("key4", 4)?;
    println!("contains key1? {}", cache.contains_key(&"key1"));

    // An update re-queues the key at the back
    cache.put("key2", 20)?;
    cache.put("key5", 5)?;
    println!("contains key3? {}", cache.contains_key(&"key3"));
    println!("order: {:?}", cache.keys().collect::<Vec<_>>());

    match cache.get(&"key1") {
        Ok(value) => println!("key1 = {value}"),
        Err(err) => println!("key1: {err}"),
    }
    Ok(())
}

// Expected output:
// contains key1? false
// contains key3? false
// order: ["key4", "key2", "key5"]
// key1: key is not in the cache
