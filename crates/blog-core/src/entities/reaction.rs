//! Reaction entity - a single user's emoji on a blog

use chrono::{DateTime, Utc};

use crate::value_objects::{Emoji, Snowflake};

/// Reaction entity. At most one live row exists per (blog, user); changing
/// the emoji updates the row in place and removal deletes it outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Snowflake,
    pub blog_id: Snowflake,
    pub user_id: Snowflake,
    pub emoji: Emoji,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(id: Snowflake, blog_id: Snowflake, user_id: Snowflake, emoji: Emoji) -> Self {
        let now = Utc::now();
        Self {
            id,
            blog_id,
            user_id,
            emoji,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: Emoji) -> bool {
        self.emoji == emoji
    }

    /// Replace the emoji, stamping the modified time
    pub fn set_emoji(&mut self, emoji: Emoji) {
        self.emoji = emoji;
        self.updated_at = Utc::now();
    }
}
