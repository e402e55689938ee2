pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{LibraryService, LibraryStats};
pub use domain::model::{Author, AuthorRef, Book, EntityId};
pub use domain::{ErrorKind, LibraryError, LibraryResult, ValidationRules};
pub use infra::config::LibraryConfig;
