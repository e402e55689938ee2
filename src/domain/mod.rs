//! Library domain: entities, validation rules and the error taxonomy.

pub mod error;
pub mod model;
pub mod validation;

pub use error::{ErrorKind, LibraryError, LibraryResult};
pub use validation::ValidationRules;
