//! `virtunest-catalog` — the Catalog Store.
//!
//! Owns the static Action Pack product set and its derived read views:
//! slug lookup, category filtering, the curated featured subset, related
//! packs, and the page-metadata contract consumed by the rendering layer.
//! Everything here is pure and synchronous; "not found" and "empty result"
//! are ordinary return values, never errors.

pub mod catalog;
pub mod metadata;
pub mod product;
pub mod seed;

pub use catalog::Catalog;
pub use metadata::{PageMetadata, SITE_NAME};
pub use product::{CategoryFilter, Product, ALL_CATEGORIES};
