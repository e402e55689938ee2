//! Centralized configuration (environment variables + defaults).

use crate::domain::validation::{DEFAULT_MIN_PUBLISHED_YEAR, DEFAULT_PUBLICATIONS};
use crate::domain::ValidationRules;
use anyhow::Context;
use std::net::SocketAddr;

pub const BIND_ADDR_VAR: &str = "LIBRARY_BIND_ADDR";
pub const PUBLICATIONS_VAR: &str = "LIBRARY_PUBLICATIONS";
pub const MIN_PUBLISHED_YEAR_VAR: &str = "LIBRARY_MIN_PUBLISHED_YEAR";
pub const SEED_FIXTURES_VAR: &str = "LIBRARY_SEED_FIXTURES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Reads an optional variable, treating empty values as unset.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Address the API server listens on.
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = var(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    raw.trim()
        .parse()
        .with_context(|| format!("{BIND_ADDR_VAR} must be a socket address, got {raw:?}"))
}

/// Accepted publication names (comma-separated, exact match).
pub fn allowed_publications() -> anyhow::Result<Vec<String>> {
    let Some(raw) = var(PUBLICATIONS_VAR) else {
        return Ok(DEFAULT_PUBLICATIONS.iter().map(|p| p.to_string()).collect());
    };
    parse_publications(&raw).with_context(|| format!("invalid {PUBLICATIONS_VAR}"))
}

/// Earliest accepted publication year.
pub fn min_published_year() -> anyhow::Result<i32> {
    match var(MIN_PUBLISHED_YEAR_VAR) {
        Some(raw) => raw
            .trim()
            .parse::<i32>()
            .with_context(|| format!("{MIN_PUBLISHED_YEAR_VAR} must be a year, got {raw:?}")),
        None => Ok(DEFAULT_MIN_PUBLISHED_YEAR),
    }
}

/// Whether to load the bootstrap catalogue at startup.
pub fn seed_fixtures() -> anyhow::Result<bool> {
    match var(SEED_FIXTURES_VAR) {
        Some(raw) => parse_flag(&raw)
            .with_context(|| format!("{SEED_FIXTURES_VAR} must be true or false, got {raw:?}")),
        None => Ok(false),
    }
}

fn parse_publications(raw: &str) -> anyhow::Result<Vec<String>> {
    let publications: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    anyhow::ensure!(!publications.is_empty(), "at least one publication is required");
    Ok(publications)
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => anyhow::bail!("unrecognized flag value {other:?}"),
    }
}

/// Everything the server needs at startup, resolved once.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    pub bind_addr: SocketAddr,
    pub rules: ValidationRules,
    pub seed_fixtures: bool,
}

impl LibraryConfig {
    /// Loads `.env` (if present) and resolves every variable.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            bind_addr: bind_addr()?,
            rules: ValidationRules::new(allowed_publications()?, min_published_year()?),
            seed_fixtures: seed_fixtures()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publications_are_trimmed_and_kept_case_sensitive() {
        let parsed = parse_publications(" penguin, Penguin ,,Arihant ").unwrap();
        assert_eq!(parsed, ["penguin", "Penguin", "Arihant"]);
    }

    #[test]
    fn empty_publication_list_is_rejected() {
        assert!(parse_publications(" , ,").is_err());
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("TRUE").unwrap());
        assert!(parse_flag(" 1 ").unwrap());
        assert!(!parse_flag("no").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
