//! Request handlers. Each one unwraps the envelope, calls one client method and wraps the
//! result; every rule lives in the actors.

pub mod dishes;
pub mod orders;

use super::error::ApiError;
use axum::http::{Method, Uri};

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for any path no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Path not found: {}", uri.path()))
}
