//! # API Errors
//!
//! The single boundary where failures become HTTP responses.
//! Client errors get a fixed message; anything else is logged and
//! downgraded to a generic 500.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use product_core::ProductError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub const INVALID_PRODUCT: &str = "Invalid product data";
pub const NOT_FOUND: &str = "Product not found";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const INTERNAL: &str = "Something broke!";

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Product(#[from] ProductError),

    #[error("missing or invalid bearer credential")]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Product(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True when the client caused the failure
    pub fn is_client_error(&self) -> bool {
        match self {
            ApiError::Product(e) => e.is_client_error(),
            ApiError::Unauthorized => true,
            ApiError::Internal(_) => false,
        }
    }

    /// Client-facing message. Never carries internal detail.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Product(ProductError::Validation(_)) => INVALID_PRODUCT,
            ApiError::Product(ProductError::NotFound { .. }) => NOT_FOUND,
            ApiError::Unauthorized => UNAUTHORIZED,
            _ => INTERNAL,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Product(ProductError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        } else {
            error!(error = %self, "request failed");
        }
        (status, Json(ErrorResponse::new(self.message()))).into_response()
    }
}

/// The generic 500 response
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL)),
    )
        .into_response()
}
