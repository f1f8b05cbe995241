//! The fixed Action Pack product set.
//!
//! This is the entire inventory: defined once, loaded at process start,
//! never mutated. Image URLs point at a placeholder service keyed by a
//! per-product seed so each product keeps a stable image.

use virtunest_core::{DomainResult, Slug};

use crate::catalog::Catalog;
use crate::product::Product;

fn pack(
    slug: &str,
    title: &str,
    category: &str,
    description: &str,
    image_seed: &str,
    price: u64,
) -> DomainResult<Product> {
    Product::new(
        Slug::new(slug)?,
        title,
        category,
        description,
        format!("https://picsum.photos/seed/{image_seed}/600/400"),
        price,
        "#",
    )
}

/// The full product list, in declaration order.
pub fn action_packs() -> DomainResult<Vec<Product>> {
    Ok(vec![
        pack(
            "7-day-fitness-fuel",
            "7-Day Fitness Fuel",
            "Fitness",
            "A comprehensive 7-day workout and meal plan designed to kickstart your fitness journey and build sustainable habits.",
            "fitness-fuel",
            499,
        )?,
        pack(
            "mindful-morning-routine",
            "Mindful Morning Routine",
            "Wellness",
            "Transform your mornings from chaotic to calm with guided meditations, journaling prompts, and a step-by-step routine.",
            "mindful-morning",
            399,
        )?,
        pack(
            "digital-declutter-kit",
            "Digital Declutter Kit",
            "Productivity",
            "Reclaim your focus. This kit provides tools and strategies to organize your digital life, from your inbox to your desktop.",
            "digital-declutter",
            399,
        )?,
        pack(
            "30-minute-meal-prep",
            "30-Minute Meal Prep",
            "Food",
            "Save time and eat healthier with a collection of delicious recipes that can be prepped in 30 minutes or less.",
            "meal-prep",
            599,
        )?,
        pack(
            "home-workout-essentials",
            "Home Workout Essentials",
            "Fitness",
            "No gym? No problem. A guide to the most effective bodyweight exercises and routines you can do from home.",
            "home-workout",
            699,
        )?,
        pack(
            "the-art-of-journaling",
            "The Art of Journaling",
            "Wellness",
            "Unlock the therapeutic benefits of journaling with 50+ prompts and techniques for self-reflection and growth.",
            "journaling-art",
            299,
        )?,
        pack(
            "focus-flow-mastery",
            "Focus & Flow Mastery",
            "Productivity",
            "Learn the secrets of deep work and achieve a state of flow with scientifically-backed productivity techniques.",
            "focus-flow",
            599,
        )?,
        pack(
            "plant-based-recipe-pack",
            "Plant-Based Recipe Pack",
            "Food",
            "Explore the world of plant-based eating with over 40 easy-to-make, delicious, and healthy recipes for every meal.",
            "plant-based",
            799,
        )?,
    ])
}

/// Manually curated featured slugs, chosen for a good visual mix on the
/// homepage. Order is the display order.
pub fn featured_slugs() -> DomainResult<Vec<Slug>> {
    Ok(vec![
        Slug::new("7-day-fitness-fuel")?,
        Slug::new("digital-declutter-kit")?,
        Slug::new("mindful-morning-routine")?,
    ])
}

/// The seeded catalog: the full product list plus the curated featured set.
pub fn catalog() -> DomainResult<Catalog> {
    Catalog::new(action_packs()?, featured_slugs()?)
}
