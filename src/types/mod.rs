//! Data types for the community platform
//!
//! This module contains the documents the matching engine scores (posts and
//! communities) and the shapes it returns.

mod community;
mod post;
mod qa;

pub use community::{Community, NewCommunity};
pub use post::{NewPost, Post};
pub use qa::{QaAnswer, QaReference};

/// A searchable, immutable document supplied by storage
pub trait Document {
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn body(&self) -> &str;

    /// Text matched against queries (title and body by default)
    fn searchable_text(&self) -> String {
        format!("{} {}", self.title(), self.body())
    }
}

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &u64) -> bool {
    *val == 0
}
