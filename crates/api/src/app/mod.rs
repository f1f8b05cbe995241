//! HTTP API application wiring (Axum router + catalog wiring).
//!
//! If you're new to Rust, this folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use virtunest_catalog::Catalog;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The catalog is read-only, so sharing it as an `Arc` extension is the
/// entirety of the state wiring.
pub fn build_app(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(catalog)))
}
