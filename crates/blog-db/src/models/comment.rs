//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub blog_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

/// Grouped live-comment count per blog (from query)
#[derive(Debug, Clone, FromRow)]
pub struct CommentCountModel {
    pub blog_id: i64,
    pub count: i64,
}
