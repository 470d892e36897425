//! BlogView - the request-time composition of a blog with derived metadata
//!
//! Never persisted or cached; rebuilt from the ledgers on every read so
//! callers always observe their own writes.

use crate::entities::Blog;
use crate::value_objects::{Emoji, Snowflake};

/// Per-emoji live reaction count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiCount {
    pub emoji: Emoji,
    pub count: i64,
}

/// Aggregated reaction state for one blog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionSummary {
    pub counts: Vec<EmojiCount>,
    pub total: i64,
}

impl ReactionSummary {
    /// Build a summary from grouped (emoji, count) rows
    pub fn from_counts(counts: Vec<EmojiCount>) -> Self {
        let total = counts.iter().map(|c| c.count).sum();
        Self { counts, total }
    }

    /// Count for a single emoji kind (zero if absent)
    pub fn count_of(&self, emoji: Emoji) -> i64 {
        self.counts
            .iter()
            .find(|c| c.emoji == emoji)
            .map_or(0, |c| c.count)
    }
}

/// Derived view of a blog, merged from the blog row and both ledgers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogView {
    pub blog: Blog,
    pub comment_count: i64,
    pub reactions: ReactionSummary,
    /// The requester's own live reaction, when a requester is known
    pub current_user_reaction: Option<Emoji>,
    pub is_owner: bool,
}

impl BlogView {
    /// Compose a view from its parts
    pub fn new(
        blog: Blog,
        comment_count: i64,
        reactions: ReactionSummary,
        current_user_reaction: Option<Emoji>,
        requester: Option<Snowflake>,
    ) -> Self {
        let is_owner = requester.is_some_and(|id| id == blog.user_id);
        Self {
            blog,
            comment_count,
            reactions,
            current_user_reaction,
            is_owner,
        }
    }
}
