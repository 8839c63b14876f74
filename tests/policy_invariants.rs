// ==============================================
// CROSS-POLICY INVARIANT TESTS (integration)
// ==============================================
//
// Behaviour every `Cache` implementation must share, driven through the
// public builder so each policy runs the same operation sequences.

use evictkit::builder::{CacheBuilder, CachePolicy, PolicyCache};
use evictkit::error::CacheError;
use evictkit::traits::Cache;

fn build(policy: CachePolicy, capacity: usize) -> PolicyCache<u16, u32> {
    CacheBuilder::new(capacity).build(policy).unwrap()
}

// ==============================================
// Capacity-0 Behavior
// ==============================================
//
// Zero capacity is refused at construction rather than coerced to one.

mod zero_capacity {
    use super::*;
    use evictkit::policy::fifo::FifoCache;
    use evictkit::policy::lfu::LfuCache;
    use evictkit::policy::lru::LruCache;

    #[test]
    fn builder_rejects_zero_for_every_policy() {
        for policy in CachePolicy::ALL {
            assert!(CacheBuilder::new(0).build::<u8, u8>(policy).is_err());
        }
    }

    #[test]
    fn try_new_rejects_zero() {
        assert!(FifoCache::<u8, u8>::try_new(0).is_err());
        assert!(LruCache::<u8, u8>::try_new(0).is_err());
        assert!(LfuCache::<u8, u8>::try_new(0).is_err());
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn new_panics_on_zero() {
        let _ = LruCache::<u8, u8>::new(0);
    }
}

// ==============================================
// Shared Contract
// ==============================================

mod contract {
    use super::*;

    #[test]
    fn clear_twice_is_harmless() {
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 4);
            cache.put(1, 1).unwrap();
            cache.clear();
            assert_eq!(cache.len(), 0);
            cache.clear();
            assert_eq!(cache.len(), 0);
            assert_eq!(cache.get(&1), Err(CacheError::KeyNotFound));
        }
    }

    #[test]
    fn miss_leaves_cache_untouched() {
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 2);
            cache.put(1, 10).unwrap();
            cache.put(2, 20).unwrap();
            let before: Vec<u16> = cache.keys().copied().collect();

            assert_eq!(cache.get(&3), Err(CacheError::KeyNotFound));
            assert_eq!(cache.remove(&3), Err(CacheError::KeyNotFound));

            let after: Vec<u16> = cache.keys().copied().collect();
            assert_eq!(before, after, "{policy} reordered on a miss");
            assert_eq!(cache.len(), 2);
        }
    }

    #[test]
    fn single_slot_cache_keeps_newest() {
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 1);
            cache.put(1, 1).unwrap();
            cache.put(2, 2).unwrap();
            assert_eq!(cache.len(), 1);
            assert!(cache.contains_key(&2), "{policy} dropped the newcomer");
        }
    }

    #[test]
    fn exactly_one_eviction_per_new_key() {
        for policy in CachePolicy::ALL {
            let mut cache = build(policy, 3);
            for k in 0..3 {
                cache.put(k, 0).unwrap();
            }
            cache.put(100, 0).unwrap();
            assert_eq!(cache.len(), 3, "{policy} evicted more than one entry");
        }
    }
}

// ==============================================
// Property Tests
// ==============================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Put(u16, u32),
        Get(u16),
        Remove(u16),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => (0u16..48, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
            4 => (0u16..48).prop_map(Op::Get),
            2 => (0u16..48).prop_map(Op::Remove),
            1 => Just(Op::Clear),
        ]
    }

    fn policy() -> impl Strategy<Value = CachePolicy> {
        prop_oneof![
            Just(CachePolicy::Fifo),
            Just(CachePolicy::Lru),
            Just(CachePolicy::Lfu),
        ]
    }

    proptest! {
        /// Size never exceeds capacity and a put key is always resident.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_bounded_and_resident(
            policy in policy(),
            capacity in 1usize..12,
            ops in prop::collection::vec(op(), 0..300)
        ) {
            let mut cache = build(policy, capacity);
            for op in ops {
                match op {
                    Op::Put(k, v) => {
                        cache.put(k, v).unwrap();
                        prop_assert!(cache.contains_key(&k));
                        prop_assert_eq!(cache.get(&k), Ok(&v));
                    }
                    Op::Get(k) => {
                        let hit = cache.contains_key(&k);
                        prop_assert_eq!(cache.get(&k).is_ok(), hit);
                    }
                    Op::Remove(k) => {
                        let _ = cache.remove(&k);
                        prop_assert!(!cache.contains_key(&k));
                    }
                    Op::Clear => {
                        cache.clear();
                        prop_assert!(cache.is_empty());
                    }
                }
                prop_assert!(cache.len() <= cache.capacity());
                prop_assert_eq!(cache.keys().count(), cache.len());
            }
        }

        /// Updating a resident key never evicts anything.
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_update_never_evicts(
            policy in policy(),
            capacity in 1usize..12,
            values in prop::collection::vec(any::<u32>(), 1..20)
        ) {
            let mut cache = build(policy, capacity);
            for k in 0..capacity as u16 {
                cache.put(k, 0).unwrap();
            }
            for v in values {
                cache.put(0, v).unwrap();
                prop_assert_eq!(cache.len(), capacity);
            }
        }
    }
}
