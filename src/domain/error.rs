//! Error taxonomy shared by the validator, the stores and the HTTP layer.

use crate::domain::model::EntityId;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Errors returned by library operations.
///
/// Every variant is a recoverable, caller-visible outcome. Validation always runs
/// before any store mutation, so an error implies the store was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// A required string field was empty.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// Identifier is not a positive integer.
    #[error("invalid id: {id}")]
    InvalidId { id: String },

    /// Publication is not in the configured allowed set.
    #[error("invalid publication: {publication:?}")]
    InvalidPublication { publication: String },

    /// Published date is malformed or outside the accepted range.
    #[error("invalid published date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    /// Candidate carries an id that is already in use.
    #[error("duplicate id: {id}")]
    DuplicateId { id: EntityId },

    /// No record carries the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },
}

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Serializable classification of a [`LibraryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    MissingField,
    InvalidId,
    InvalidPublication,
    InvalidDate,
    DuplicateId,
    NotFound,
    UnknownEndpoint,
}

impl ErrorKind {
    /// True for kinds caused by a bad request rather than a missing record.
    pub fn is_client_error(self) -> bool {
        !matches!(self, ErrorKind::NotFound)
    }
}

impl LibraryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LibraryError::MissingField { .. } => ErrorKind::MissingField,
            LibraryError::InvalidId { .. } => ErrorKind::InvalidId,
            LibraryError::InvalidPublication { .. } => ErrorKind::InvalidPublication,
            LibraryError::InvalidDate { .. } => ErrorKind::InvalidDate,
            LibraryError::DuplicateId { .. } => ErrorKind::DuplicateId,
            LibraryError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn invalid_id(id: impl ToString) -> Self {
        LibraryError::InvalidId { id: id.to_string() }
    }
}

/// Rejects identifiers that can never belong to a stored record.
pub fn ensure_positive_id(id: EntityId) -> LibraryResult<EntityId> {
    if id <= 0 {
        return Err(LibraryError::invalid_id(id));
    }
    Ok(id)
}

/// Parses an identifier taken from a path segment.
pub fn parse_id(raw: &str) -> LibraryResult<EntityId> {
    let id = raw
        .trim()
        .parse::<EntityId>()
        .map_err(|_| LibraryError::invalid_id(raw))?;
    ensure_positive_id(id)
}
