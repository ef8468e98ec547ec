//! Handler-boundary error helpers shared by every app.

use axum::{http::StatusCode, Json};

use crate::serializers::api_error::ApiError;

pub type ApiFailure = (StatusCode, Json<ApiError>);
pub type ApiResult<T> = Result<T, ApiFailure>;

fn fail(status: StatusCode, msg: impl Into<String>) -> ApiFailure {
    (status, Json(ApiError { detail: msg.into() }))
}

pub fn bad(msg: &str) -> ApiFailure {
    fail(StatusCode::BAD_REQUEST, msg)
}

pub fn unauth(msg: &str) -> ApiFailure {
    fail(StatusCode::UNAUTHORIZED, msg)
}

pub fn not_found(msg: &str) -> ApiFailure {
    fail(StatusCode::NOT_FOUND, msg)
}

/// 500 carrying the underlying cause after `context`.
pub fn internal<E: std::fmt::Display>(context: &str, e: E) -> ApiFailure {
    tracing::error!(error = %e, "{}", context);
    fail(StatusCode::INTERNAL_SERVER_ERROR, format!("{context}: {e}"))
}
