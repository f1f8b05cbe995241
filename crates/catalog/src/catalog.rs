//! The Catalog Store: deterministic, side-effect-free queries over the
//! static product set.

use std::collections::HashSet;

use virtunest_core::{DomainError, DomainResult, Slug};

use crate::metadata::PageMetadata;
use crate::product::{CategoryFilter, Product, ALL_CATEGORIES};

/// Read-only store over a fixed product set plus a curated featured list.
///
/// Built once at process start and never mutated afterwards. Construction is
/// the only fallible operation: it enforces slug uniqueness so every query
/// can treat the slug as a total lookup key. All queries are bounded by the
/// (small, fixed) product count and never allocate beyond their result.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    featured: Vec<Slug>,
}

impl Catalog {
    /// Build a catalog from a product list (declaration order is preserved
    /// and meaningful) and the curated featured slugs (curation order).
    ///
    /// Rejects duplicate slugs. Featured slugs are *not* required to resolve;
    /// dangling entries are skipped at query time.
    pub fn new(products: Vec<Product>, featured: Vec<Slug>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.slug().clone()) {
                return Err(DomainError::validation(format!(
                    "duplicate slug: {}",
                    product.slug()
                )));
            }
        }
        Ok(Self { products, featured })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up the unique product for `slug`. Unknown slugs are a normal,
    /// expected case and yield `None`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug().as_str() == slug)
    }

    /// Full product set in declaration order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products matching `filter`, original relative order preserved.
    /// An unknown category label yields an empty vec, not an error.
    pub fn by_category(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Distinct category labels in first-occurrence order, with the `"All"`
    /// pseudo-category prepended. Recomputed per call; the input is tiny
    /// and fixed.
    pub fn categories(&self) -> Vec<String> {
        let mut labels = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !labels.iter().any(|l| l == product.category()) {
                labels.push(product.category().to_string());
            }
        }
        labels
    }

    /// Up to `limit` products sharing `product`'s category, excluding
    /// `product` itself, in original order. First-N truncation, no ranking.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == product.category() && p.slug() != product.slug())
            .take(limit)
            .collect()
    }

    /// The curated featured subset, in curation order. Curated slugs that no
    /// longer resolve are skipped silently.
    pub fn featured(&self) -> Vec<&Product> {
        self.featured
            .iter()
            .filter_map(|slug| self.find_by_slug(slug.as_str()))
            .collect()
    }

    /// Page metadata for the product at `slug`, or `None` for an unknown
    /// slug ("supply nothing", never an error).
    pub fn page_metadata(&self, slug: &str) -> Option<PageMetadata> {
        self.find_by_slug(slug).map(PageMetadata::for_product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> Slug {
        Slug::new(s).unwrap()
    }

    fn pack(s: &str, category: &str) -> Product {
        Product::new(
            slug(s),
            format!("Pack {s}"),
            category,
            format!("Description for {s}."),
            format!("https://picsum.photos/seed/{s}/600/400"),
            499,
            "#",
        )
        .unwrap()
    }

    /// Eight entries across four categories, two each (the shape of the
    /// real seed).
    fn test_catalog() -> Catalog {
        Catalog::new(
            vec![
                pack("fit-one", "Fitness"),
                pack("well-one", "Wellness"),
                pack("prod-one", "Productivity"),
                pack("food-one", "Food"),
                pack("fit-two", "Fitness"),
                pack("well-two", "Wellness"),
                pack("prod-two", "Productivity"),
                pack("food-two", "Food"),
            ],
            vec![slug("fit-one"), slug("prod-one"), slug("well-one")],
        )
        .unwrap()
    }

    #[test]
    fn construction_rejects_duplicate_slugs() {
        let err = Catalog::new(
            vec![pack("dup", "Fitness"), pack("dup", "Food")],
            Vec::new(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("dup")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn find_by_slug_returns_the_matching_product() {
        let catalog = test_catalog();
        for product in catalog.all() {
            let found = catalog.find_by_slug(product.slug().as_str()).unwrap();
            assert_eq!(found.slug(), product.slug());
        }
    }

    #[test]
    fn find_by_slug_returns_none_for_unknown_slug() {
        let catalog = test_catalog();
        assert!(catalog.find_by_slug("does-not-exist").is_none());
        assert!(catalog.find_by_slug("").is_none());
        assert!(catalog.find_by_slug("FIT-ONE").is_none());
    }

    #[test]
    fn all_preserves_declaration_order() {
        let catalog = test_catalog();
        let slugs: Vec<&str> = catalog.all().iter().map(|p| p.slug().as_str()).collect();
        assert_eq!(
            slugs,
            [
                "fit-one", "well-one", "prod-one", "food-one", "fit-two", "well-two",
                "prod-two", "food-two"
            ]
        );
    }

    #[test]
    fn all_sentinel_returns_the_full_set_in_order() {
        let catalog = test_catalog();
        let filtered = catalog.by_category(&CategoryFilter::All);
        assert_eq!(filtered.len(), catalog.len());
        for (got, expected) in filtered.iter().zip(catalog.all()) {
            assert_eq!(got.slug(), expected.slug());
        }
    }

    #[test]
    fn by_category_returns_only_matches_in_declaration_order() {
        let catalog = test_catalog();
        let fitness = catalog.by_category(&CategoryFilter::parse("Fitness"));
        let slugs: Vec<&str> = fitness.iter().map(|p| p.slug().as_str()).collect();
        assert_eq!(slugs, ["fit-one", "fit-two"]);
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let catalog = test_catalog();
        assert!(catalog.by_category(&CategoryFilter::parse("Gardening")).is_empty());
    }

    #[test]
    fn categories_are_deduplicated_with_all_first() {
        let catalog = test_catalog();
        assert_eq!(
            catalog.categories(),
            ["All", "Fitness", "Wellness", "Productivity", "Food"]
        );
    }

    #[test]
    fn related_excludes_self_and_shares_category() {
        let catalog = test_catalog();
        let fit_one = catalog.find_by_slug("fit-one").unwrap();
        let related = catalog.related(fit_one, 3);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug().as_str(), "fit-two");
    }

    #[test]
    fn related_respects_limit() {
        let catalog = Catalog::new(
            vec![
                pack("a", "Fitness"),
                pack("b", "Fitness"),
                pack("c", "Fitness"),
                pack("d", "Fitness"),
            ],
            Vec::new(),
        )
        .unwrap();
        let a = catalog.find_by_slug("a").unwrap();
        let related = catalog.related(a, 2);
        let slugs: Vec<&str> = related.iter().map(|p| p.slug().as_str()).collect();
        assert_eq!(slugs, ["b", "c"]);
        assert!(catalog.related(a, 0).is_empty());
    }

    #[test]
    fn featured_follows_curation_order() {
        let catalog = test_catalog();
        let slugs: Vec<&str> = catalog.featured().iter().map(|p| p.slug().as_str()).collect();
        assert_eq!(slugs, ["fit-one", "prod-one", "well-one"]);
    }

    #[test]
    fn featured_skips_unresolvable_slugs() {
        let catalog = Catalog::new(
            vec![pack("a", "Fitness"), pack("b", "Food")],
            vec![slug("b"), slug("gone"), slug("a")],
        )
        .unwrap();
        let slugs: Vec<&str> = catalog.featured().iter().map(|p| p.slug().as_str()).collect();
        assert_eq!(slugs, ["b", "a"]);
    }

    #[test]
    fn page_metadata_is_none_for_unknown_slug() {
        let catalog = test_catalog();
        assert!(catalog.page_metadata("does-not-exist").is_none());

        let meta = catalog.page_metadata("fit-one").unwrap();
        assert_eq!(meta.title(), "Pack fit-one | VirtuNest");
        assert_eq!(meta.canonical_path(), "/packs/fit-one");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// A well-formed product set: generated categories from a small pool,
        /// slugs made unique by index.
        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec(
                proptest::sample::select(vec!["Fitness", "Wellness", "Productivity", "Food"]),
                0..16,
            )
            .prop_map(|categories| {
                categories
                    .into_iter()
                    .enumerate()
                    .map(|(i, category)| pack(&format!("pack-{i}"), category))
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: lookup is total — any input string yields a clean
            /// `Option`, and a hit always agrees on the slug.
            #[test]
            fn find_by_slug_is_total(products in arb_products(), needle in ".*") {
                let catalog = Catalog::new(products, Vec::new()).unwrap();
                if let Some(found) = catalog.find_by_slug(&needle) {
                    prop_assert_eq!(found.slug().as_str(), needle.as_str());
                }
            }

            /// Property: filtering returns exactly the matching products,
            /// in original relative order.
            #[test]
            fn by_category_is_sound(products in arb_products(), label in "[A-Za-z]{1,12}") {
                let catalog = Catalog::new(products, Vec::new()).unwrap();
                let filter = CategoryFilter::parse(&label);
                let filtered = catalog.by_category(&filter);

                for p in &filtered {
                    prop_assert!(filter.matches(p));
                }

                let expected: Vec<&str> = catalog
                    .all()
                    .iter()
                    .filter(|p| filter.matches(p))
                    .map(|p| p.slug().as_str())
                    .collect();
                let got: Vec<&str> = filtered.iter().map(|p| p.slug().as_str()).collect();
                prop_assert_eq!(got, expected);
            }

            /// Property: the `"All"` sentinel always returns the full set.
            #[test]
            fn all_sentinel_equals_all(products in arb_products()) {
                let catalog = Catalog::new(products, Vec::new()).unwrap();
                let filtered = catalog.by_category(&CategoryFilter::All);
                prop_assert_eq!(filtered.len(), catalog.len());
            }

            /// Property: related never contains the anchor product, never
            /// exceeds the limit, and only shares the anchor's category.
            #[test]
            fn related_is_bounded_and_excludes_self(
                products in arb_products(),
                anchor_ix in 0usize..16,
                limit in 0usize..8,
            ) {
                let catalog = Catalog::new(products, Vec::new()).unwrap();
                prop_assume!(!catalog.is_empty());
                let anchor = &catalog.all()[anchor_ix % catalog.len()];

                let related = catalog.related(anchor, limit);
                prop_assert!(related.len() <= limit);
                for p in related {
                    prop_assert_ne!(p.slug(), anchor.slug());
                    prop_assert_eq!(p.category(), anchor.category());
                }
            }

            /// Property: categories are deduplicated, first-occurrence
            /// ordered, and led by the sentinel.
            #[test]
            fn categories_are_distinct_with_sentinel_first(products in arb_products()) {
                let catalog = Catalog::new(products, Vec::new()).unwrap();
                let categories = catalog.categories();

                prop_assert_eq!(categories[0].as_str(), ALL_CATEGORIES);

                let mut seen = std::collections::HashSet::new();
                for label in &categories {
                    prop_assert!(seen.insert(label.clone()), "duplicate label {}", label);
                }

                // Every product's category appears, nothing else does.
                for p in catalog.all() {
                    prop_assert!(categories.iter().any(|l| l == p.category()));
                }
                prop_assert_eq!(
                    categories.len() - 1,
                    catalog
                        .all()
                        .iter()
                        .map(|p| p.category())
                        .collect::<std::collections::HashSet<_>>()
                        .len()
                );
            }
        }
    }
}
