//! The [`BlogStore`] trait defining the record storage interface.

use blog_types::{BlogId, BlogPost, BlogPostInput};

use crate::error::StoreResult;

/// Storage backend for blog posts.
///
/// Implementations must be thread-safe (`Send + Sync`). Every operation is
/// atomic with respect to every other: no caller ever observes a partially
/// applied change. Returned posts are owned copies.
pub trait BlogStore: Send + Sync {
    /// Every stored post, each exactly once.
    ///
    /// Fails with [`StoreError::EmptyCollection`](crate::StoreError::EmptyCollection)
    /// when nothing is stored. Callers must not rely on the order.
    fn list(&self) -> StoreResult<Vec<BlogPost>>;

    /// The post with the given identifier.
    fn get(&self, id: BlogId) -> StoreResult<BlogPost>;

    /// Validate `input`, assign an identifier, and store a new post.
    ///
    /// `created_at` and `updated_at` are both set to the current time. A
    /// validation failure stores nothing and consumes no identifier.
    fn create(&self, input: BlogPostInput) -> StoreResult<BlogPost>;

    /// Replace the content of an existing post.
    ///
    /// Validation runs before the existence check, so an incomplete payload
    /// is reported as such even for an unknown identifier. `id` and
    /// `created_at` are preserved.
    fn update(&self, id: BlogId, input: BlogPostInput) -> StoreResult<BlogPost>;

    /// Remove a post permanently.
    fn delete(&self, id: BlogId) -> StoreResult<()>;
}
