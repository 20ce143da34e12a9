use std::future::Future;
use std::sync::Arc;

use blog_store::{BlogStore, InMemoryBlogStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Blog post HTTP server.
///
/// Owns the one store instance for the life of the process and hands it to
/// every request through [`AppState`].
pub struct BlogServer {
    config: ServerConfig,
    state: AppState,
}

impl BlogServer {
    /// Create a server with a fresh in-memory store built from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryBlogStore::with_policy(config.id_policy));
        Self::with_store(config, store)
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn BlogStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<dyn BlogStore> {
        Arc::clone(&self.state.store)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), self.config.strict_validation)
    }

    /// Serve until the process is killed.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then finish in-flight requests.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            id_policy = %self.config.id_policy,
            strict_validation = self.config.strict_validation,
            "blog server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
