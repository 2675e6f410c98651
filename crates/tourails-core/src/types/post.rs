//! Community feed types.

use serde::{Deserialize, Serialize};

/// Who wrote a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Single-character avatar shown in the gradient circle
    pub avatar: String,
    pub location: String,
    pub verified: bool,
}

/// A feed post.
///
/// `is_liked` / `is_saved` describe the seed state only. Once a feed is on
/// screen the current state lives in [`crate::selection::FeedEngagement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    pub author: Author,
    pub image: String,
    pub caption: String,
    /// Like count as seeded, already including our like if `is_liked`
    pub likes: u32,
    pub comments: u32,
    pub time_ago: String,
    pub is_liked: bool,
    pub is_saved: bool,
}

/// A story bubble in the strip above the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: u32,
    pub user: String,
    pub avatar: String,
    pub has_new: bool,
}
