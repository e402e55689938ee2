//! In-memory entity storage: one keyed store and one id allocator per entity type.

pub mod allocator;
pub mod store;

pub use allocator::IdAllocator;
pub use store::{MemoryStore, RecordsView};
