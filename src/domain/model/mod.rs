//! Domain model definitions for library entities.

pub mod author;
pub mod book;
pub mod fixtures;

pub use author::Author;
pub use book::{AuthorRef, Book};

/// Identifier type shared by every entity. Stored records always carry a positive id.
pub type EntityId = i64;

/// Trait that defines the contract for any entity kept in a library store.
///
/// The store works with any entity without knowing its fields; each
/// implementation only exposes its identifier and a name used in errors and logs.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Singular name of the entity type (e.g. `book`).
    const KIND: &'static str;

    /// Returns the identifier carried by this value (0 when unassigned).
    fn id(&self) -> EntityId;

    /// Overwrites the identifier. Only the store calls this.
    fn set_id(&mut self, id: EntityId);
}
