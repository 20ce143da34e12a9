use blog_types::BlogId;

/// Errors from blog store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// One or more of `title`, `description`, `body` is empty.
    #[error("missing required field")]
    Validation { fields: Vec<&'static str> },

    /// No post with this identifier exists.
    #[error("blog not found")]
    NotFound { id: BlogId },

    /// A listing was requested while the store holds no posts.
    #[error("no blogs in DB")]
    EmptyCollection,

    /// The identifier chosen for a new post is already taken.
    #[error("blog id {id} is already in use")]
    IdConflict { id: BlogId },

    /// The identifier space is used up.
    #[error("no blog ids left to assign")]
    IdsExhausted,

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Returns `true` if the caller's payload was at fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
