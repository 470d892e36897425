//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub blog_id: i64,
    pub user_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Grouped per-blog, per-emoji count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ReactionRollupModel {
    pub blog_id: i64,
    pub emoji: String,
    pub count: i64,
}

/// One user's own reaction on a blog (from query)
#[derive(Debug, Clone, FromRow)]
pub struct UserReactionModel {
    pub blog_id: i64,
    pub emoji: String,
}
