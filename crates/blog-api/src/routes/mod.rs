//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v2.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{blogs, comments, health, reactions};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v2", api_v2_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v2 routes
fn api_v2_routes() -> Router<AppState> {
    Router::new()
        .merge(blog_routes())
        .merge(comment_routes())
        .merge(reaction_routes())
}

/// Blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(blogs::create_blog))
        .route("/blogs", get(blogs::list_blogs))
        // Static segments must stay distinct from :blog_id captures
        .route("/blogs/bulk", get(blogs::get_blogs_bulk))
        .route("/blogs/:blog_id", get(blogs::get_blog))
        .route("/blogs/:blog_id", put(blogs::update_blog))
        .route("/blogs/:blog_id", delete(blogs::delete_blog))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs/bulk-comments", get(comments::bulk_comments))
        .route("/blogs/:blog_id/comments", post(comments::create_comment))
        .route("/blogs/:blog_id/comments", get(comments::list_comments))
        .route(
            "/blogs/:blog_id/comments/:comment_id",
            put(comments::update_comment),
        )
        .route(
            "/blogs/:blog_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
}

/// Reaction routes
fn reaction_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs/bulk-reactions", get(reactions::bulk_reactions))
        .route("/blogs/:blog_id/reactions", put(reactions::upsert_reaction))
        .route(
            "/blogs/:blog_id/reactions",
            delete(reactions::remove_reaction),
        )
}
