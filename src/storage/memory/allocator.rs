//! Identifier allocation.

use crate::domain::model::EntityId;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues monotonically increasing identifiers for one entity type.
///
/// Identifiers start at 1 and are never handed out twice, even after the record
/// that held them is deleted. Safe to share between tasks.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicI64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }

    /// Returns the next unused identifier.
    pub fn next_id(&self) -> EntityId {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Records an identifier issued elsewhere (e.g. a seeded record) so that
    /// later calls to [`next_id`](Self::next_id) stay above it.
    pub fn observe(&self, id: EntityId) {
        self.next.fetch_max(id.saturating_add(1), Ordering::SeqCst);
    }

    /// Highest identifier issued or observed so far, 0 if none.
    pub fn last_issued(&self) -> EntityId {
        self.next.load(Ordering::SeqCst) - 1
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
