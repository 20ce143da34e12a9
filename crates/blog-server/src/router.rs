use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::middleware::require_blog_fields;
use crate::state::AppState;

/// Prefix shared by every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Build the axum router with all blog endpoints.
pub fn build_router(state: AppState, strict_validation: bool) -> Router {
    let mut blogs = Router::new()
        .route("/blog-posts", get(handler::list_blogs))
        .route("/blog-post", post(handler::create_blog))
        .route("/blog-post/", post(handler::create_blog))
        .route(
            "/blog-post/:id",
            get(handler::get_blog)
                .put(handler::update_blog)
                .delete(handler::delete_blog),
        );
    if strict_validation {
        blogs = blogs.route_layer(middleware::from_fn(require_blog_fields));
    }

    let api = blogs.route("/health", get(handler::health_handler));

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(handler::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
