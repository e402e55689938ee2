//! The Library Service.
//!
//! This module is the intermediary between the HTTP handlers and the stores.
//! It is responsible for:
//! 1.  Running the validation rules before any store mutation.
//! 2.  Keeping the Book and Author stores, each with its own lock and id allocator.
//! 3.  Resolving the book -> author relation for lookups.

use crate::domain::error::{ensure_positive_id, LibraryError, LibraryResult};
use crate::domain::model::{fixtures, Author, Book, EntityId};
use crate::domain::validation::{validate_author, validate_book, validate_book_fields};
use crate::domain::ValidationRules;
use crate::storage::MemoryStore;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info};
use utoipa::ToSchema;

/// Source of "today" for the published-date upper bound.
pub type Clock = fn() -> NaiveDate;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Record counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LibraryStats {
    pub books: usize,
    pub authors: usize,
    pub last_book_id: EntityId,
    pub last_author_id: EntityId,
}

/// The main service that owns the entity stores and applies the domain rules.
pub struct LibraryService {
    books: MemoryStore<Book>,
    authors: MemoryStore<Author>,
    rules: ValidationRules,
    clock: Clock,
}

impl LibraryService {
    /// Creates an empty service using the given rules and the UTC calendar date.
    pub fn new(rules: ValidationRules) -> Self {
        Self::with_clock(rules, utc_today)
    }

    pub fn with_clock(rules: ValidationRules, clock: Clock) -> Self {
        Self {
            books: MemoryStore::new(),
            authors: MemoryStore::new(),
            rules,
            clock,
        }
    }

    /// Loads the bootstrap catalogue. Later creates continue above the seeded ids.
    pub async fn seed_fixtures(&self) -> LibraryResult<()> {
        let authors = self.authors.seed(fixtures::seed_authors()).await?;
        let books = self.books.seed(fixtures::seed_books()).await?;
        info!(authors, books, "seeded library fixtures");
        Ok(())
    }

    pub async fn stats(&self) -> LibraryStats {
        LibraryStats {
            books: self.books.len().await,
            authors: self.authors.len().await,
            last_book_id: self.books.last_issued_id(),
            last_author_id: self.authors.last_issued_id(),
        }
    }

    // --- Books ---

    pub async fn list_books(&self) -> Vec<Book> {
        self.books.list().await
    }

    pub async fn get_book(&self, id: EntityId) -> LibraryResult<Book> {
        let id = ensure_positive_id(id)?;
        self.books
            .get(id)
            .await
            .ok_or(LibraryError::NotFound { entity: "book", id })
    }

    pub async fn create_book(&self, candidate: Book) -> LibraryResult<Book> {
        if candidate.id < 0 {
            return Err(LibraryError::invalid_id(candidate.id));
        }
        let today = (self.clock)();
        let result = self
            .books
            .insert(candidate, |book, records| {
                validate_book(book, &self.rules, today, |id| records.contains(id))
            })
            .await;

        match &result {
            Ok(book) => info!(id = book.id, title = %book.title, "book created"),
            Err(e) => debug!(error = %e, "book rejected"),
        }
        result
    }

    pub async fn update_book(&self, id: EntityId, candidate: Book) -> LibraryResult<Book> {
        let id = ensure_positive_id(id)?;
        let today = (self.clock)();
        let result = self
            .books
            .replace(id, candidate, |book| validate_book_fields(book, &self.rules, today))
            .await;

        match &result {
            Ok(_) => info!(id, "book updated"),
            Err(e) => debug!(id, error = %e, "book update rejected"),
        }
        result
    }

    pub async fn delete_book(&self, id: EntityId) -> LibraryResult<()> {
        let id = ensure_positive_id(id)?;
        self.books.remove(id).await?;
        info!(id, "book deleted");
        Ok(())
    }

    /// Books whose author reference points at `author_id`.
    pub async fn books_by_author(&self, author_id: EntityId) -> LibraryResult<Vec<Book>> {
        let author_id = ensure_positive_id(author_id)?;
        if !self.authors.contains(author_id).await {
            return Err(LibraryError::NotFound {
                entity: "author",
                id: author_id,
            });
        }
        Ok(self
            .books
            .filter(|book| book.author.id == author_id)
            .await)
    }

    // --- Authors ---

    pub async fn list_authors(&self) -> Vec<Author> {
        self.authors.list().await
    }

    pub async fn get_author(&self, id: EntityId) -> LibraryResult<Author> {
        let id = ensure_positive_id(id)?;
        self.authors
            .get(id)
            .await
            .ok_or(LibraryError::NotFound { entity: "author", id })
    }

    pub async fn create_author(&self, candidate: Author) -> LibraryResult<Author> {
        let result = self
            .authors
            .insert(candidate, |author, _| validate_author(author))
            .await;

        match &result {
            Ok(author) => info!(id = author.id, "author created"),
            Err(e) => debug!(error = %e, "author rejected"),
        }
        result
    }

    pub async fn update_author(&self, id: EntityId, candidate: Author) -> LibraryResult<Author> {
        let id = ensure_positive_id(id)?;
        let result = self.authors.replace(id, candidate, validate_author).await;

        match &result {
            Ok(_) => info!(id, "author updated"),
            Err(e) => debug!(id, error = %e, "author update rejected"),
        }
        result
    }

    /// Removes an author. Books referencing it keep their (now dangling) reference.
    pub async fn delete_author(&self, id: EntityId) -> LibraryResult<()> {
        let id = ensure_positive_id(id)?;
        self.authors.remove(id).await?;
        info!(id, "author deleted");
        Ok(())
    }
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new(ValidationRules::default())
    }
}
