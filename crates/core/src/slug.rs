//! Strongly-typed product identifier used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// URL-safe identifier of a product (stable primary key + routing id).
///
/// A slug is non-empty, lowercase ASCII alphanumerics separated by single
/// interior hyphens (`7-day-fitness-fuel`). Construction validates the shape;
/// once built, a `Slug` is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Parse and validate a slug.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_slug("slug cannot be empty"));
        }
        if value.starts_with('-') || value.ends_with('-') {
            return Err(DomainError::invalid_slug(format!(
                "{value}: leading/trailing hyphen"
            )));
        }
        if value.contains("--") {
            return Err(DomainError::invalid_slug(format!(
                "{value}: consecutive hyphens"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::invalid_slug(format!(
                "{value}: only lowercase ASCII alphanumerics and hyphens allowed"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Slug {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
