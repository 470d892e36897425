//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every bulk method takes the whole id set
//! and must resolve it with a single grouped query; the aggregator's
//! bounded query cost depends on that contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Blog, Comment, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::{Emoji, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Fetch users for a set of IDs in one query (for response composition)
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Blog Repository
// ============================================================================

/// Listing options for blog queries
#[derive(Debug, Clone, Default)]
pub struct BlogListQuery {
    /// Case-insensitive title substring filter
    pub search: Option<String>,
    pub skip: i64,
    pub limit: i64,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find a live blog by ID (soft-deleted rows are invisible here)
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>>;

    /// Fetch all live blogs for a set of IDs in one query; missing or
    /// deleted IDs are simply absent from the result
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Blog>>;

    /// List live blogs with optional title filter and offset/limit
    async fn list(&self, query: BlogListQuery) -> RepoResult<Vec<Blog>>;

    /// Persist a new blog
    async fn create(&self, blog: &Blog) -> RepoResult<()>;

    /// Persist title/content/updated_at of an existing blog
    async fn update(&self, blog: &Blog) -> RepoResult<()>;

    /// Flip the deleted flag; returns false if no live row matched
    async fn soft_delete(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool>;
}

// ============================================================================
// Comment Repository (comment ledger)
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a live comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Live comments on one blog, creation time ascending
    async fn find_by_blog(&self, blog_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Live comments across many blogs in one query, creation time ascending
    async fn find_by_blogs(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<Comment>>;

    /// Live comment counts per blog, one grouped query. Blogs with no live
    /// comments are absent from the result.
    async fn count_by_blogs(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, i64)>>;

    /// Persist a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Persist content/updated_at of an existing comment
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Flip the deleted flag; returns false if no live row matched
    async fn soft_delete(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool>;
}

// ============================================================================
// Reaction Repository (reaction ledger)
// ============================================================================

/// One grouped summary row: live reaction count for an emoji on a blog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionRollup {
    pub blog_id: Snowflake,
    pub emoji: Emoji,
    pub count: i64,
}

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert the reaction or, if a row for (blog, user) already exists,
    /// overwrite its emoji and modified timestamp. Must be atomic under
    /// concurrent callers (uniqueness constraint, not read-then-write).
    /// Returns the resulting row.
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction>;

    /// Delete the (blog, user) row if present; returns whether a row was
    /// removed. Absence is not an error.
    async fn remove(&self, blog_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Raw reactions across many blogs in one query
    async fn find_by_blogs(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<Reaction>>;

    /// Per-blog, per-emoji counts in one grouped query
    async fn summarize(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<ReactionRollup>>;

    /// The given user's own reaction per blog, one query
    async fn current_reactions(
        &self,
        blog_ids: &[Snowflake],
        user_id: Snowflake,
    ) -> RepoResult<Vec<(Snowflake, Emoji)>>;
}
