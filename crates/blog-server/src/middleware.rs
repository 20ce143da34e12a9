//! Request validation applied when `strict_validation` is enabled.

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use blog_types::BlogPostInput;

use crate::error::ApiError;

/// Same limit axum applies to `Json` bodies by default.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Reject create/update bodies that are not JSON or leave a field empty,
/// before the store sees them. Other methods pass straight through.
pub async fn require_blog_fields(request: Request, next: Next) -> Response {
    if !matches!(*request.method(), Method::POST | Method::PUT) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("require_blog_fields failed: {e}");
            return ApiError::BadRequest("Invalid JSON format".into()).into_response();
        }
    };

    match serde_json::from_slice::<BlogPostInput>(&bytes) {
        Ok(input) if input.is_complete() => {}
        Ok(input) => {
            tracing::warn!(missing = ?input.missing_fields(), "missing required field");
            return ApiError::BadRequest("Missing required field".into()).into_response();
        }
        Err(e) => {
            tracing::error!("require_blog_fields failed: {e}");
            return ApiError::BadRequest("Invalid JSON format".into()).into_response();
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
