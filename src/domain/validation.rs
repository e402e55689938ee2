//! Field and cross-field rules for Book and Author payloads.
//!
//! All functions here are pure: they look at the candidate, the configured
//! [`ValidationRules`], the current date and (for duplicate detection) a
//! membership predicate over the ids already in the book store.

use crate::domain::error::{LibraryError, LibraryResult};
use crate::domain::model::{Author, Book, EntityId};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Publications accepted when no override is configured.
pub const DEFAULT_PUBLICATIONS: &[&str] = &["scholostic", "penguin", "Arihant", "Penguin"];

/// Earliest publication year accepted when no override is configured.
pub const DEFAULT_MIN_PUBLISHED_YEAR: i32 = 1900;

/// Externalized book rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Exact, case-sensitive set of accepted publication names.
    pub allowed_publications: BTreeSet<String>,
    pub min_published_year: i32,
}

impl ValidationRules {
    pub fn new<I, S>(allowed_publications: I, min_published_year: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_publications: allowed_publications.into_iter().map(Into::into).collect(),
            min_published_year,
        }
    }

    pub fn allows_publication(&self, publication: &str) -> bool {
        self.allowed_publications.contains(publication)
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLICATIONS.iter().copied(), DEFAULT_MIN_PUBLISHED_YEAR)
    }
}

pub fn validate_author(candidate: &Author) -> LibraryResult<()> {
    if candidate.first_name.is_empty() {
        return Err(LibraryError::MissingField { field: "firstName" });
    }
    if candidate.last_name.is_empty() {
        return Err(LibraryError::MissingField { field: "lastName" });
    }
    Ok(())
}

/// Publication and date rules, in that order. Used directly by updates.
pub fn validate_book_fields(
    candidate: &Book,
    rules: &ValidationRules,
    today: NaiveDate,
) -> LibraryResult<()> {
    if !rules.allows_publication(&candidate.publication) {
        return Err(LibraryError::InvalidPublication {
            publication: candidate.publication.clone(),
        });
    }

    let published = parse_published_date(&candidate.published_date)?;
    if published.year() < rules.min_published_year {
        return Err(invalid_date(
            &candidate.published_date,
            format!("year is before {}", rules.min_published_year),
        ));
    }
    if published > today {
        return Err(invalid_date(&candidate.published_date, "date is in the future"));
    }
    Ok(())
}

/// Full create-time check: field rules first, then the duplicate id rule.
///
/// `is_taken` reports whether an id is already held by a stored book.
pub fn validate_book<F>(
    candidate: &Book,
    rules: &ValidationRules,
    today: NaiveDate,
    is_taken: F,
) -> LibraryResult<()>
where
    F: Fn(EntityId) -> bool,
{
    validate_book_fields(candidate, rules, today)?;
    if candidate.id != 0 && is_taken(candidate.id) {
        return Err(LibraryError::DuplicateId { id: candidate.id });
    }
    Ok(())
}

/// Parses a `day/month/year` triple into a calendar date.
pub fn parse_published_date(raw: &str) -> LibraryResult<NaiveDate> {
    let parts: Vec<&str> = raw.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid_date(raw, "expected day/month/year"));
    };

    let day = parse_component(raw, day)?;
    let month = parse_component(raw, month)?;
    let year = parse_component(raw, year)?;

    let year = i32::try_from(year).map_err(|_| invalid_date(raw, "year out of range"))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| invalid_date(raw, "not a calendar date"))
}

fn parse_component(raw: &str, part: &str) -> LibraryResult<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_date(raw, "expected numeric day/month/year"));
    }
    part.parse::<u32>()
        .map_err(|_| invalid_date(raw, "component out of range"))
}

fn invalid_date(raw: &str, reason: impl Into<String>) -> LibraryError {
    LibraryError::InvalidDate {
        value: raw.to_string(),
        reason: reason.into(),
    }
}
