use evictkit::error::CacheError;
use evictkit::policy::lfu::LfuCache;
use evictkit::traits::Cache;

fn main() -> Result<(), CacheError> {
    let mut cache: LfuCache<&str, i32> = LfuCache::new(3);

    cache.put("key1", 1)?;
    cache.put("key1", 6)?;
    cache.put("key2", 2)?;
    cache.put("key3", 3)?;
    cache.get(&"key3")?;

    for key in ["key1", "key2", "key3"] {
        println!("{key}: frequency {:?}", cache.frequency(&key));
    }

    cache.put("key4", 10)?;
    println!("contains key2? {}", cache.contains_key(&"key2"));

    if let Some(item) = cache.item(&"key1") {
        println!(
            "{} = {} (seen {} times)",
            item.key(),
            item.value(),
            item.frequency()
        );
    }
    Ok(())
}

// Expected output:
// key1: frequency Some(2)
// key2: frequency Some(1)
// key3: frequency Some(2)
// contains key2? false
// key1 = 6 (seen 2 times)
