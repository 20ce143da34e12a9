//! In-memory blog store.
//!
//! [`InMemoryBlogStore`] keeps every post in a `BTreeMap` behind one
//! `Mutex`. All operations, reads included, take the lock for their whole
//! duration, so reads are serialized with writes and with each other. Data is
//! lost when the store is dropped.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use blog_types::{BlogId, BlogPost, BlogPostInput, Clock, SystemClock};
use chrono::{DateTime, Duration, Utc};

use crate::error::{StoreError, StoreResult};
use crate::policy::IdPolicy;
use crate::traits::BlogStore;

/// State guarded by the store lock.
#[derive(Debug, Default)]
struct StoreState {
    posts: BTreeMap<BlogId, BlogPost>,
    /// Highest identifier ever assigned. Zero before the first create.
    high_water: BlogId,
}

impl StoreState {
    /// Pick the identifier for the next post without reserving it.
    fn next_id(&self, policy: IdPolicy) -> StoreResult<BlogId> {
        let id = match policy {
            IdPolicy::Sequential => self.high_water.checked_add(1),
            IdPolicy::CollectionSize => BlogId::try_from(self.posts.len())
                .ok()
                .and_then(|len| len.checked_add(1)),
        }
        .ok_or(StoreError::IdsExhausted)?;

        if self.posts.contains_key(&id) {
            return Err(StoreError::IdConflict { id });
        }
        Ok(id)
    }
}

/// A volatile implementation of [`BlogStore`].
pub struct InMemoryBlogStore {
    state: Mutex<StoreState>,
    policy: IdPolicy,
    clock: Arc<dyn Clock>,
}

impl InMemoryBlogStore {
    /// Create an empty store with sequential identifiers and wall-clock time.
    pub fn new() -> Self {
        Self::with_policy(IdPolicy::default())
    }

    /// Create an empty store using the given identifier policy.
    pub fn with_policy(policy: IdPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    /// Create an empty store with an explicit time source.
    pub fn with_clock(policy: IdPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            policy,
            clock,
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Number of posts currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.lock()?.posts.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.lock()?.posts.is_empty())
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreState>> {
        self.state.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InMemoryBlogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBlogStore")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

fn validate(input: &BlogPostInput) -> StoreResult<()> {
    let fields = input.missing_fields();
    if fields.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation { fields })
    }
}

/// The clock reading if it moved past `previous`, else the smallest step
/// after it. Keeps `updated_at` strictly increasing across updates.
fn strictly_after(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

impl BlogStore for InMemoryBlogStore {
    fn list(&self) -> StoreResult<Vec<BlogPost>> {
        let state = self.lock()?;
        if state.posts.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        Ok(state.posts.values().cloned().collect())
    }

    fn get(&self, id: BlogId) -> StoreResult<BlogPost> {
        let state = self.lock()?;
        state
            .posts
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn create(&self, input: BlogPostInput) -> StoreResult<BlogPost> {
        let mut state = self.lock()?;
        validate(&input)?;

        let id = state.next_id(self.policy)?;
        let now = self.clock.now();
        let post = BlogPost {
            id,
            title: input.title,
            description: input.description,
            body: input.body,
            created_at: now,
            updated_at: now,
        };

        state.posts.insert(id, post.clone());
        state.high_water = state.high_water.max(id);
        Ok(post)
    }

    fn update(&self, id: BlogId, input: BlogPostInput) -> StoreResult<BlogPost> {
        let mut state = self.lock()?;
        validate(&input)?;

        let now = self.clock.now();
        let post = state
            .posts
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;

        post.title = input.title;
        post.description = input.description;
        post.body = input.body;
        post.updated_at = strictly_after(post.updated_at, now);
        Ok(post.clone())
    }

    fn delete(&self, id: BlogId) -> StoreResult<()> {
        let mut state = self.lock()?;
        state
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}
