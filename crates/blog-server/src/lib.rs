//! HTTP gateway for the blog post service.
//!
//! Translates REST requests under `/api/v1` into [`BlogStore`] calls and maps
//! the results to JSON responses. The gateway owns no records; it holds the
//! store through [`AppState`].
//!
//! [`BlogStore`]: blog_store::BlogStore

pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorBody, MessageBody, ServerError, ServerResult};
pub use server::BlogServer;
pub use state::AppState;
