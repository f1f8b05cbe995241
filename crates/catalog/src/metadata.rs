//! Page-metadata contract for the rendering layer.

use virtunest_core::ValueObject;

use crate::product::Product;

/// Site name used in page titles.
pub const SITE_NAME: &str = "VirtuNest";

/// Everything the rendering layer needs to populate page metadata for one
/// product: document title, social-preview description/image, and the
/// canonical path of the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    title: String,
    description: String,
    image_url: String,
    canonical_path: String,
}

impl PageMetadata {
    pub fn for_product(product: &Product) -> Self {
        Self {
            title: format!("{} | {SITE_NAME}", product.title()),
            description: product.description().to_string(),
            image_url: product.image_url().to_string(),
            canonical_path: format!("/packs/{}", product.slug()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }
}

impl ValueObject for PageMetadata {}
