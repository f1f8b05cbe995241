use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use virtunest_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidSlug(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_slug", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "pack not found"),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
