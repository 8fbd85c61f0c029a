//! Community types

use serde::{Deserialize, Serialize};

use super::{is_zero, Document};

/// A community grouping posts around a place or topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "is_zero")]
    pub created_at: u64,
}

impl Community {
    /// Create a new community with default values
    pub fn new(id: String, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            country: None,
            language: None,
            tags: Vec::new(),
            created_by: None,
            created_at: 0,
        }
    }
}

impl Document for Community {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    /// Description stands in for the body; tags are not searched
    fn body(&self) -> &str {
        &self.description
    }
}

/// Request body for creating a community
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCommunity {
    pub title: Option<String>,
    #[serde(default)]
    pub description: String,
    pub country: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
}
