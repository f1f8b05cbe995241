use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use virtunest_catalog::{Catalog, CategoryFilter, ALL_CATEGORIES};
use virtunest_core::DomainError;

use crate::app::{dto, errors};

/// Related packs shown on the detail page when the client does not ask for
/// a specific count.
const DEFAULT_RELATED_LIMIT: usize = 3;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_packs))
        .route("/:slug", get(get_pack))
        .route("/:slug/related", get(related_packs))
        .route("/:slug/metadata", get(pack_metadata))
}

pub async fn list_packs(
    Extension(catalog): Extension<Arc<Catalog>>,
    Query(params): Query<dto::ListPacksParams>,
) -> axum::response::Response {
    let filter = params
        .category
        .as_deref()
        .map(CategoryFilter::parse)
        .unwrap_or(CategoryFilter::All);

    let items = catalog
        .by_category(&filter)
        .into_iter()
        .map(dto::pack_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_pack(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    // Any string is a legal lookup key; unknown slugs are simply not found.
    match catalog.find_by_slug(&slug) {
        Some(pack) => (StatusCode::OK, Json(dto::pack_to_json(pack))).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}

pub async fn related_packs(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(slug): Path<String>,
    Query(params): Query<dto::RelatedParams>,
) -> axum::response::Response {
    let Some(pack) = catalog.find_by_slug(&slug) else {
        return errors::domain_error_to_response(DomainError::not_found());
    };

    let limit = params.limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    let items = catalog
        .related(pack, limit)
        .into_iter()
        .map(dto::pack_to_json)
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn pack_metadata(
    Extension(catalog): Extension<Arc<Catalog>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    // "Supply nothing" for an unknown slug: an empty object, not an error.
    let body = match catalog.page_metadata(&slug) {
        Some(meta) => dto::metadata_to_json(&meta),
        None => serde_json::json!({}),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn list_categories(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> axum::response::Response {
    let items = catalog.categories();
    debug_assert_eq!(items.first().map(String::as_str), Some(ALL_CATEGORIES));
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn list_featured(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> axum::response::Response {
    let items = catalog
        .featured()
        .into_iter()
        .map(dto::pack_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}
