//! Eviction policies.
//!
//! | Policy | Type                 | Evicts                              |
//! |--------|----------------------|-------------------------------------|
//! | FIFO   | [`fifo::FifoCache`]  | Oldest insert or last update        |
//! | LRU    | [`lru::LruCache`]    | Least recently read or written      |
//! | LFU    | [`lfu::LfuCache`]    | Lowest access frequency             |

pub mod fifo;
pub mod lfu;
pub mod lru;
