//! Concurrent record store for the blog post service.
//!
//! The store owns every [`BlogPost`](blog_types::BlogPost) in the process.
//! It assigns identifiers, rejects incomplete payloads, enforces existence
//! checks, and serializes all access behind a single exclusive lock.
//!
//! # Modules
//!
//! - [`error`] — [`StoreError`] and the [`StoreResult`] alias
//! - [`traits`] — The [`BlogStore`] trait the HTTP layer consumes
//! - [`policy`] — [`IdPolicy`], how new identifiers are chosen
//! - [`memory`] — [`InMemoryBlogStore`], the volatile implementation

pub mod error;
pub mod memory;
pub mod policy;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryBlogStore;
pub use policy::IdPolicy;
pub use traits::BlogStore;
