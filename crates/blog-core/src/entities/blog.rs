//! Blog entity - an authored post with soft-delete semantics

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Blog entity. Rows are never physically removed; deletion flips the
/// `deleted` flag so comment and reaction history stays intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Blog {
    /// Create a new live Blog
    pub fn new(id: Snowflake, user_id: Snowflake, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
            deleted: false,
        }
    }

    /// Check if the blog is visible to ordinary readers
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.deleted
    }

    /// Apply a partial edit, stamping the modified time
    pub fn edit(&mut self, title: Option<String>, content: Option<String>) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.updated_at = Utc::now();
    }

    /// Soft-delete the blog
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Utc::now();
    }
}
