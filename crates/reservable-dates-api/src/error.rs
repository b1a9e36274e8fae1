use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use reservable_dates_core::error::ValidationErrors;
use thiserror::Error;

use crate::dto::ErrorResponse;

/// Errors a handler can return. All of them render as `{"errors": [...]}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.messages()),
            AppError::Body(rejection) => (rejection.status(), vec![rejection.body_text()]),
        };
        (status, Json(ErrorResponse { errors })).into_response()
    }
}

/// Invalid CORS configuration.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),
}
