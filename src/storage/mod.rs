pub mod memory;

pub use memory::{IdAllocator, MemoryStore, RecordsView};
