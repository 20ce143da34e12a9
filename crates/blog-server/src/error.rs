use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use blog_store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// `{"error": "..."}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// `{"message": "..."}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// A failed request, as seen by the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The path parameter or request body could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    /// The store refused the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Store failures, validation included, are reported as server errors.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
