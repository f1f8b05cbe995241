//! Entity trait: identity-based domain objects.

/// Minimal interface for domain objects whose identity outlives their data.
///
/// For this catalog the only entity is the product, identified by its slug:
/// two products with the same slug are the same product, whatever their
/// display fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
