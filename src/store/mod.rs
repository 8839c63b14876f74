//! Storage backends wrapped by the legacy adapter.

pub mod hashmap;
pub mod traits;

pub use hashmap::HashMapStore;
pub use traits::UnboundedStore;
