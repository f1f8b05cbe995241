use serde::Deserialize;

use virtunest_catalog::{PageMetadata, Product};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ListPacksParams {
    /// Category label; absent or `All` selects the full set.
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedParams {
    pub limit: Option<usize>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn pack_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "slug": p.slug().as_str(),
        "title": p.title(),
        "category": p.category(),
        "description": p.description(),
        "image_url": p.image_url(),
        "price": p.price(),
        // Opaque pass-through: the checkout link is never validated or rewritten.
        "purchase_url": p.purchase_url(),
    })
}

pub fn metadata_to_json(m: &PageMetadata) -> serde_json::Value {
    serde_json::json!({
        "title": m.title(),
        "description": m.description(),
        "image_url": m.image_url(),
        "canonical_path": m.canonical_path(),
    })
}
