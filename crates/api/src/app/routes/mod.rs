use axum::{routing::get, Router};

pub mod packs;
pub mod system;

/// Router for the catalog read surface.
pub fn router() -> Router {
    Router::new()
        .route("/categories", get(packs::list_categories))
        .route("/featured", get(packs::list_featured))
        .nest("/packs", packs::router())
}
