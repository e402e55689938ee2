pub mod library_service;

#[cfg(test)]
mod library_proptest;

pub use library_service::{LibraryService, LibraryStats};
