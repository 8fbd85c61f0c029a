//! Storage for communities and posts
//!
//! The matching engine never touches storage directly: handlers fetch
//! documents through [`ContentStore`] and hand them to the ranker.

mod memory;
mod seed;

pub use memory::MemoryStore;
pub use seed::demo_records;

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::types::{Community, Post};

/// One line of a JSONL data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Community(Community),
    Post(Post),
}

/// Read/write access to communities and posts
pub trait ContentStore: Send + Sync {
    /// All posts, newest first
    fn posts_by_recency(&self) -> StoreResult<Vec<Post>>;

    /// The `n` most recently created posts
    fn recent_posts(&self, n: usize) -> StoreResult<Vec<Post>> {
        let mut posts = self.posts_by_recency()?;
        posts.truncate(n);
        Ok(posts)
    }

    fn post(&self, id: &str) -> StoreResult<Option<Post>>;

    /// Posts of one community, newest first
    fn community_posts(&self, community_id: &str) -> StoreResult<Vec<Post>> {
        let mut posts = self.posts_by_recency()?;
        posts.retain(|p| p.community_id == community_id);
        Ok(posts)
    }

    /// All communities, newest first
    fn communities(&self) -> StoreResult<Vec<Community>>;

    fn create_post(&self, post: Post) -> StoreResult<Post>;

    fn create_community(&self, community: Community) -> StoreResult<Community>;
}
