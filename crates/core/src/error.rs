//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// malformed identifiers). Catalog queries themselves never fail: absence is
/// expressed as `Option`/empty results, and `NotFound` exists only so the
/// HTTP boundary can translate absence into a status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. duplicate slug in a product set).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A slug was malformed (parse failure).
    #[error("invalid slug: {0}")]
    InvalidSlug(String),

    /// A requested resource was not found (boundary-level).
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_slug(msg: impl Into<String>) -> Self {
        Self::InvalidSlug(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
