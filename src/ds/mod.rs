pub mod frequency_queue;
pub mod intrusive_list;
pub mod slot_arena;

pub use frequency_queue::{FrequencyQueue, Rank};
pub use intrusive_list::IntrusiveList;
pub use slot_arena::{SlotArena, SlotId};
