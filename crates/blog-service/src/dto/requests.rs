//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Blog Requests
// ============================================================================

/// Create blog request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,
}

/// Update blog request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: Option<String>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

/// Update comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Upsert reaction request. The emoji kind is validated against the known
/// set in the service so an unknown kind maps to a 422, not a decode error.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertReactionRequest {
    pub emoji: String,
}
