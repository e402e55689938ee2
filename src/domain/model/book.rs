use super::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Weak reference from a book to its author.
///
/// Only the id is kept; any other author fields present in a payload are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AuthorRef {
    pub id: EntityId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    /// Assigned by the server. A non-zero id on create must not collide with a stored book.
    pub id: EntityId,
    pub title: String,
    pub author: AuthorRef,
    pub publication: String,
    /// `day/month/year`, e.g. `11/9/2000`.
    pub published_date: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author_id: EntityId,
        publication: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            author: AuthorRef { id: author_id },
            publication: publication.into(),
            published_date: published_date.into(),
        }
    }

    /// Same book carrying an explicit id.
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for Book {
    const KIND: &'static str = "book";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
