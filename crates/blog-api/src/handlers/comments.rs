//! Comment handlers
//!
//! Comment lifecycle nested under blogs, plus the bulk comment fetch.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::dto::responses::BulkCommentsResponse;
use blog_service::dto::{
    ApiResponse, CommentResponse, CreateCommentRequest, UpdateCommentRequest,
};
use blog_service::services::CommentService;

use crate::extractors::{AuthUser, BulkIds, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Add a comment to a blog
///
/// `POST /api/v2/blogs/:blog_id/comments`
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(blog_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<ApiResponse<CommentResponse>>>> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let service = CommentService::new(state.service_context());
    let comment = service.add_comment(identity, blog_id, request).await?;
    Ok(Created(Json(ApiResponse::new(comment))))
}

/// List live comments on a blog, oldest first
///
/// `GET /api/v2/blogs/:blog_id/comments`
pub async fn list_comments(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<CommentResponse>>>> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let service = CommentService::new(state.service_context());
    let comments = service.list_comments(blog_id).await?;
    Ok(Json(ApiResponse::new(comments)))
}

/// Update a comment
///
/// `PUT /api/v2/blogs/:blog_id/comments/:comment_id`
pub async fn update_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path((blog_id, comment_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<ApiResponse<CommentResponse>>> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let comment_id = parse_id(&comment_id, "comment")?;
    let service = CommentService::new(state.service_context());
    let comment = service
        .update_comment(identity, blog_id, comment_id, request)
        .await?;
    Ok(Json(ApiResponse::new(comment)))
}

/// Soft-delete a comment
///
/// `DELETE /api/v2/blogs/:blog_id/comments/:comment_id`
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path((blog_id, comment_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let comment_id = parse_id(&comment_id, "comment")?;
    let service = CommentService::new(state.service_context());
    service.delete_comment(identity, blog_id, comment_id).await?;
    Ok(NoContent)
}

/// Bulk comments across a set of blog ids
///
/// `GET /api/v2/blogs/bulk-comments?ids=1&ids=2`
pub async fn bulk_comments(
    State(state): State<AppState>,
    BulkIds(ids): BulkIds,
) -> ApiResult<Json<ApiResponse<BulkCommentsResponse>>> {
    let service = CommentService::new(state.service_context());
    let grouped = service.bulk_comments(&ids).await?;
    Ok(Json(ApiResponse::new(grouped)))
}
