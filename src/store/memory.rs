//! In-memory store loaded from a JSONL data file

use std::fs;
use std::path::Path;

use parking_lot::RwLock;

use super::{ContentStore, Record};
use crate::error::{StoreError, StoreResult};
use crate::types::{Community, Post};

/// Thread-safe in-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    communities: RwLock<Vec<Community>>,
    posts: RwLock<Vec<Post>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from records
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut communities = Vec::new();
        let mut posts = Vec::new();

        for record in records {
            match record {
                Record::Community(c) => communities.push(c),
                Record::Post(p) => posts.push(p),
            }
        }

        Self {
            communities: RwLock::new(communities),
            posts: RwLock::new(posts),
        }
    }

    /// Load a JSONL data file, one record per line
    ///
    /// A missing file yields an empty store. Lines that fail to parse are
    /// skipped with a warning.
    pub fn load_from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "data file not found, starting empty");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut records = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<Record>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(line = line_no + 1, error = %e, "skipping malformed record");
                }
            }
        }

        let store = Self::from_records(records);
        tracing::info!(
            communities = store.communities.read().len(),
            posts = store.posts.read().len(),
            "loaded data file"
        );
        Ok(store)
    }
}

/// Newest first; among equal timestamps the later insertion comes first
fn by_recency<T: Clone>(items: &[T], created_at: impl Fn(&T) -> u64) -> Vec<T> {
    let mut sorted: Vec<T> = items.iter().rev().cloned().collect();
    sorted.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    sorted
}

impl ContentStore for MemoryStore {
    fn posts_by_recency(&self) -> StoreResult<Vec<Post>> {
        Ok(by_recency(&self.posts.read()[..], |p| p.created_at))
    }

    fn post(&self, id: &str) -> StoreResult<Option<Post>> {
        Ok(self.posts.read().iter().find(|p| p.id == id).cloned())
    }

    fn communities(&self) -> StoreResult<Vec<Community>> {
        Ok(by_recency(&self.communities.read()[..], |c| c.created_at))
    }

    fn create_post(&self, post: Post) -> StoreResult<Post> {
        let known = self
            .communities
            .read()
            .iter()
            .any(|c| c.id == post.community_id);
        if !known {
            return Err(StoreError::UnknownCommunity(post.community_id));
        }

        self.posts.write().push(post.clone());
        Ok(post)
    }

    fn create_community(&self, community: Community) -> StoreResult<Community> {
        self.communities.write().push(community.clone());
        Ok(community)
    }
}
