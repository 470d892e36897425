//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::entities::{BlogView, Comment, Reaction, ReactionSummary, User};

use super::responses::{
    BlogViewResponse, CommentResponse, EmojiCountResponse, ReactionResponse,
    ReactionSummaryResponse, UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            verified: user.verified,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Blog View Mappers
// ============================================================================

impl From<&ReactionSummary> for ReactionSummaryResponse {
    fn from(summary: &ReactionSummary) -> Self {
        Self {
            counts: summary
                .counts
                .iter()
                .map(|c| EmojiCountResponse {
                    emoji: c.emoji.as_str().to_string(),
                    count: c.count,
                })
                .collect(),
            total: summary.total,
        }
    }
}

impl From<&BlogView> for BlogViewResponse {
    fn from(view: &BlogView) -> Self {
        Self {
            id: view.blog.id.to_string(),
            user_id: view.blog.user_id.to_string(),
            title: view.blog.title.clone(),
            content: view.blog.content.clone(),
            created_at: view.blog.created_at,
            updated_at: view.blog.updated_at,
            comment_count: view.comment_count,
            reactions: ReactionSummaryResponse::from(&view.reactions),
            current_user_reaction: view.current_user_reaction.map(|e| e.as_str().to_string()),
            is_owner: view.is_owner,
        }
    }
}

impl From<BlogView> for BlogViewResponse {
    fn from(view: BlogView) -> Self {
        Self::from(&view)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            blog_id: comment.blog_id.to_string(),
            user_id: comment.user_id.to_string(),
            content: comment.content.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author: None,
        }
    }
}

impl CommentResponse {
    /// Attach the author resolved from the user repository
    #[must_use]
    pub fn with_author(mut self, author: UserResponse) -> Self {
        self.author = Some(author);
        self
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            blog_id: reaction.blog_id.to_string(),
            user_id: reaction.user_id.to_string(),
            emoji: reaction.emoji.as_str().to_string(),
            created_at: reaction.created_at,
            updated_at: reaction.updated_at,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self::from(&reaction)
    }
}
