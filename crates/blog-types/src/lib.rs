//! Foundation types for the blog post service.
//!
//! Every other crate in the workspace depends on `blog-types`.
//!
//! # Key Types
//!
//! - [`BlogPost`] — A stored record, as handed out by the store
//! - [`BlogPostInput`] — The caller-supplied payload for create and update
//! - [`BlogId`] — The store-assigned record identifier
//! - [`Clock`] — Source of record timestamps ([`SystemClock`], [`ManualClock`])

pub mod clock;
pub mod post;

pub use clock::{Clock, ManualClock, SystemClock};
pub use post::{BlogId, BlogPost, BlogPostInput};
