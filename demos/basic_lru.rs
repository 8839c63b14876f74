use evictkit::error::CacheError;
use evictkit::policy::lru::LruCache;
use evictkit::traits::Cache;

fn main() -> Result<(), CacheError> {
    let mut cache: LruCache<u32, String> = LruCache::new(2);

    cache.put(1, "alpha".to_string())?;
    cache.put(2, "beta".to_string())?;

    if let Ok(value) = cache.get(&1) {
        println!("hit 1: {value}");
    }

    cache.put(3, "gamma".to_string())?;

    println!("contains 2? {}", cache.contains_key(&2));
    Ok(())
}

// Expected output:
// hit 1: alpha
// contains 2? false
//
// Explanation: capacity=2; after get(&1), key 1 is MRU and key 2 is LRU.
// Inserting key 3 evicts key 2, so contains_key(2) is false.
