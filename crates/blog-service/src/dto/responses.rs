//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user response (limited fields)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub verified: bool,
}

// ============================================================================
// Blog Responses
// ============================================================================

/// Per-emoji reaction count
#[derive(Debug, Clone, Serialize)]
pub struct EmojiCountResponse {
    pub emoji: String,
    pub count: i64,
}

/// Aggregated reaction state for one blog
#[derive(Debug, Clone, Serialize)]
pub struct ReactionSummaryResponse {
    pub counts: Vec<EmojiCountResponse>,
    pub total: i64,
}

/// A blog with its derived metadata, rebuilt on every read
#[derive(Debug, Clone, Serialize)]
pub struct BlogViewResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comment_count: i64,
    pub reactions: ReactionSummaryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_reaction: Option<String>,
    pub is_owner: bool,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with its author embedded when known
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserResponse>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// A single stored reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-blog item of the bulk-reactions endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BlogReactionsResponse {
    pub reactions: Vec<ReactionResponse>,
    pub summary: ReactionSummaryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user_reaction: Option<String>,
}

/// Bulk comments: blog id (as string) to its live comments
pub type BulkCommentsResponse = HashMap<String, Vec<CommentResponse>>;

/// Bulk reactions: blog id (as string) to its reaction state
pub type BulkReactionsResponse = HashMap<String, BlogReactionsResponse>;

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Per-dependency readiness checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}
