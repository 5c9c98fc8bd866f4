//! API error type and its HTTP rendering.

use crate::dish_actor::DishError;
use crate::order_actor::OrderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Every failure a handler can return. The message is sent to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request was rejected by a validation rule.
    #[error("{0}")]
    Validation(String),

    /// The addressed record or path does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// The actor system failed; never caused by the request itself.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<DishError> for ApiError {
    fn from(e: DishError) -> Self {
        match e {
            DishError::NotFound(_) => ApiError::NotFound(e.to_string()),
            e if e.is_validation() => ApiError::Validation(e.to_string()),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(_) => ApiError::NotFound(e.to_string()),
            e if e.is_validation() => ApiError::Validation(e.to_string()),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
