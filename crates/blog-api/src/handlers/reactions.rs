//! Reaction handlers
//!
//! One reaction per (blog, user); PUT replaces, DELETE is idempotent.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use blog_service::dto::responses::BulkReactionsResponse;
use blog_service::dto::{ApiResponse, ReactionResponse, UpsertReactionRequest};
use blog_service::services::ReactionService;
use serde::Deserialize;

use crate::extractors::{AuthUser, BulkIds, OptionalAuthUser, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RemoveReactionQuery {
    /// Admins may remove another user's reaction by naming them
    pub user_id: Option<String>,
}

/// Set the caller's reaction on a blog, replacing any previous one
///
/// `PUT /api/v2/blogs/:blog_id/reactions`
pub async fn upsert_reaction(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(blog_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpsertReactionRequest>,
) -> ApiResult<Json<ApiResponse<ReactionResponse>>> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let service = ReactionService::new(state.service_context());
    let reaction = service.upsert_reaction(identity, blog_id, request).await?;
    Ok(Json(ApiResponse::new(reaction)))
}

/// Remove a reaction. Succeeds with 204 whether or not one existed.
///
/// `DELETE /api/v2/blogs/:blog_id/reactions[?user_id=]`
pub async fn remove_reaction(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(blog_id): Path<String>,
    Query(query): Query<RemoveReactionQuery>,
) -> ApiResult<NoContent> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let target = query
        .user_id
        .as_deref()
        .map(|raw| parse_id(raw, "user"))
        .transpose()?;

    let service = ReactionService::new(state.service_context());
    service.remove_reaction(identity, blog_id, target).await?;
    Ok(NoContent)
}

/// Bulk reaction state across a set of blog ids
///
/// `GET /api/v2/blogs/bulk-reactions?ids=1&ids=2`
pub async fn bulk_reactions(
    State(state): State<AppState>,
    OptionalAuthUser(identity): OptionalAuthUser,
    BulkIds(ids): BulkIds,
) -> ApiResult<Json<ApiResponse<BulkReactionsResponse>>> {
    let service = ReactionService::new(state.service_context());
    let result = service.bulk_reactions(&ids, identity).await?;
    Ok(Json(ApiResponse::new(result)))
}
