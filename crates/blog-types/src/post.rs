use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a blog post. Always strictly positive.
pub type BlogId = i64;

/// A blog post as held by the store.
///
/// Values handed out by the store are clones; mutating one never affects the
/// stored record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogId,
    pub title: String,
    pub description: String,
    pub body: String,
    /// Fixed when the post is created.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or updating a blog post.
///
/// Absent JSON fields decode as empty strings, so an incomplete body is
/// rejected by validation rather than by the parser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPostInput {
    pub title: String,
    pub description: String,
    pub body: String,
}

impl BlogPostInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            body: body.into(),
        }
    }

    /// Names of the required fields that are empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.body.is_empty() {
            missing.push("body");
        }
        missing
    }

    /// Returns `true` if every required field is non-empty.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
