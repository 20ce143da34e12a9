use serde::{Deserialize, Serialize};

/// How the store picks the identifier of a newly created post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// One past the highest identifier ever assigned by this store.
    /// Identifiers of deleted posts are never handed out again.
    #[default]
    Sequential,
    /// One past the number of posts currently stored.
    ///
    /// Compatible with older deployments. After a delete the computed
    /// identifier can still be occupied; the create is then refused with
    /// [`StoreError::IdConflict`](crate::StoreError::IdConflict).
    CollectionSize,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::CollectionSize => "collection-size",
        }
    }
}

impl std::fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
