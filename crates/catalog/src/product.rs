use serde::{Deserialize, Serialize};

use virtunest_core::{DomainError, DomainResult, Entity, Slug};

/// A single purchasable Action Pack bundle.
///
/// Immutable value entity: identity is the slug, everything else is display
/// data. There are no create/update/delete operations anywhere in the system;
/// products exist for the process lifetime exactly as declared in the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    slug: Slug,
    title: String,
    category: String,
    description: String,
    image_url: String,
    price: u64,
    purchase_url: String,
}

impl Product {
    /// Build a product, validating the display fields.
    pub fn new(
        slug: Slug,
        title: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        price: u64,
        purchase_url: impl Into<String>,
    ) -> DomainResult<Self> {
        let title = title.into();
        let category = category.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if price == 0 {
            return Err(DomainError::validation("price must be positive"));
        }

        Ok(Self {
            slug,
            title,
            category,
            description: description.into(),
            image_url: image_url.into(),
            price,
            purchase_url: purchase_url.into(),
        })
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Minor-unit-free currency amount.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Opaque external checkout link. Passed through unmodified; never
    /// validated or rewritten by this system.
    pub fn purchase_url(&self) -> &str {
        &self.purchase_url
    }
}

impl Entity for Product {
    type Id = Slug;

    fn id(&self) -> &Self::Id {
        &self.slug
    }
}

/// Label of the pseudo-category that selects the full product set.
pub const ALL_CATEGORIES: &str = "All";

/// Category selection for listing queries: the `"All"` sentinel made explicit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Select every product (the prepended `"All"` pseudo-category).
    All,
    /// Select products whose category equals the label exactly.
    Category(String),
}

impl CategoryFilter {
    /// Interpret a label: the exact string `"All"` is the sentinel, anything
    /// else names a category (known or not — unknown labels simply match
    /// nothing).
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(label) => product.category() == label,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(label) => label,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}
