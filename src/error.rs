//! Error Handling Module
//!
//! Maps catalog and internal failures to HTTP responses.
//! This is the only place errors become status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::db::CatalogError;

/// API error type
///
/// # Design Decision
///
/// - 404: slug or id did not resolve, message names the entity
/// - 500: everything else, with a fixed generic message
///
/// 민감한 내부 정보는 클라이언트에 노출하지 않음 (로그에만 기록)
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 404 Not Found ============
    #[error("{0} not found")]
    NotFound(String),

    // ============ 500 Internal Server Error ============
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{} not found", resource),
            ),
            ApiError::DatabaseError(_) => {
                // 내부 에러는 상세 정보 없이 500
                tracing::error!("Database error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Catalog failures: NotFound keeps its entity, the rest become 500
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(entity) => ApiError::NotFound(entity.to_string()),
            CatalogError::StoreUnavailable(detail) => ApiError::DatabaseError(detail),
        }
    }
}
