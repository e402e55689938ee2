//! Bootstrap catalogue loaded when `LIBRARY_SEED_FIXTURES=true`.

use super::{Author, Book};

/// Seed authors, with their ids already assigned.
pub fn seed_authors() -> Vec<Author> {
    let mut author = Author::new("Joey", "Paul", "01-08-2001", Some("Joe"));
    author.id = 1;
    vec![author]
}

/// Seed books, all written by author 1, with their ids already assigned.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("English", 1, "scholostic", "11/9/2000").with_id(1),
        Book::new("Mathematics", 1, "penguin", "9/11/1999").with_id(2),
        Book::new("Science", 1, "Arihant", "3/4/1980").with_id(3),
    ]
}
