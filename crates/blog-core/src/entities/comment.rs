//! Comment entity - an authored remark on a blog

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity. Soft-deleted like blogs; the row and body stay
/// retrievable for audit paths but are excluded from counts and listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub blog_id: Snowflake,
    pub user_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Comment {
    /// Create a new live Comment
    pub fn new(id: Snowflake, blog_id: Snowflake, user_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            blog_id,
            user_id,
            content,
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        !self.deleted
    }

    /// Replace the body, stamping the modified time
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Soft-delete the comment
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lifecycle() {
        let mut comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            "First!".to_string(),
        );
        assert!(comment.is_live());

        comment.edit("Edited".to_string());
        assert_eq!(comment.content, "Edited");

        comment.mark_deleted();
        assert!(!comment.is_live());
        // Body survives soft delete for audit paths
        assert_eq!(comment.content, "Edited");
    }
}
