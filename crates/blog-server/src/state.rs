use std::sync::Arc;

use blog_store::{BlogStore, InMemoryBlogStore};

/// Shared handler state. Cloned per request; the store itself is shared.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryBlogStore::new()))
    }
}
