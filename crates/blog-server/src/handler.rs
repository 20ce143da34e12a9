use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::Json;
use blog_types::{BlogId, BlogPost, BlogPostInput};
use serde_json::{json, Value};

use crate::error::{ApiError, MessageBody};
use crate::state::AppState;

/// Log a failed request and hand the error back for the response.
fn failed(op: &'static str, err: impl Into<ApiError>) -> ApiError {
    let err = err.into();
    tracing::error!(op, status = err.status().as_u16(), "{op} failed: {err}");
    err
}

fn parse_id(op: &'static str, raw: &str) -> Result<BlogId, ApiError> {
    raw.parse::<BlogId>()
        .map_err(|e| failed(op, ApiError::BadRequest(e.to_string())))
}

fn parse_body(
    op: &'static str,
    payload: Result<Json<BlogPostInput>, JsonRejection>,
) -> Result<BlogPostInput, ApiError> {
    payload
        .map(|Json(input)| input)
        .map_err(|e| failed(op, ApiError::BadRequest(e.body_text())))
}

/// `GET /blog-posts`
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let posts = state.store.list().map_err(|e| failed("list_blogs", e))?;
    Ok(Json(posts))
}

/// `GET /blog-post/{id}`
pub async fn get_blog(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let id = parse_id("get_blog", &raw_id)?;
    let post = state.store.get(id).map_err(|e| failed("get_blog", e))?;
    Ok(Json(post))
}

/// `POST /blog-post`
pub async fn create_blog(
    State(state): State<AppState>,
    payload: Result<Json<BlogPostInput>, JsonRejection>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    let input = parse_body("create_blog", payload)?;
    let post = state
        .store
        .create(input)
        .map_err(|e| failed("create_blog", e))?;
    tracing::debug!(id = post.id, "blog created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// `PUT /blog-post/{id}`
///
/// The id is checked before the body, so a bad id wins over a bad body.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<BlogPostInput>, JsonRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let id = parse_id("update_blog", &raw_id)?;
    let input = parse_body("update_blog", payload)?;
    let post = state
        .store
        .update(id, input)
        .map_err(|e| failed("update_blog", e))?;
    tracing::debug!(id, "blog updated");
    Ok(Json(post))
}

/// `DELETE /blog-post/{id}`
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_id("delete_blog", &raw_id)?;
    state
        .store
        .delete(id)
        .map_err(|e| failed("delete_blog", e))?;
    tracing::debug!(id, "blog deleted");
    Ok(Json(MessageBody {
        message: "Blog deleted successfully".into(),
    }))
}

/// `GET /health`
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Anything no route matched.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("Cannot {method} {}", uri.path()))
}
