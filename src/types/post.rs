//! Post types for community discussions

use serde::{Deserialize, Serialize};

use super::{is_zero, Document};

/// A post published in a community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(rename = "communityId")]
    pub community_id: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "is_zero")]
    pub created_at: u64,
}

impl Post {
    /// Create a new post with default values
    pub fn new(id: String, community_id: String, author_id: String, title: String, body: String) -> Self {
        Self {
            id,
            community_id,
            author_id,
            title,
            body,
            tags: Vec::new(),
            category: None,
            created_at: 0,
        }
    }
}

impl Document for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }
}

/// Request body for creating a post
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    #[serde(rename = "communityId")]
    pub community_id: Option<String>,
    #[serde(rename = "authorId")]
    pub author_id: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Option<String>,
}

impl NewPost {
    /// Names of required fields that are missing or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("communityId", &self.community_id),
            ("authorId", &self.author_id),
            ("title", &self.title),
            ("body", &self.body),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }
}
