//! Blog handlers
//!
//! CRUD, listing, and bulk view retrieval for blogs. Reads are public;
//! anonymous requesters simply get no `current_user_reaction` and
//! `is_owner` false.

use axum::{
    extract::{Path, State},
    Json,
};
use blog_service::dto::{
    ApiResponse, BlogViewResponse, CreateBlogRequest, UpdateBlogRequest,
};
use blog_service::services::{BlogService, ListBlogsParams};

use crate::extractors::{AuthUser, BulkIds, ListQuery, OptionalAuthUser, ValidatedJson};
use crate::handlers::parse_id;
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a blog
///
/// `POST /api/v2/blogs`
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBlogRequest>,
) -> ApiResult<Created<Json<ApiResponse<BlogViewResponse>>>> {
    let service = BlogService::new(state.service_context());
    let view = service.create_blog(identity, request).await?;
    Ok(Created(Json(ApiResponse::new(view))))
}

/// List blogs with optional title search, sort key, and paging
///
/// `GET /api/v2/blogs?sort=&search=&skip=&limit=`
pub async fn list_blogs(
    State(state): State<AppState>,
    OptionalAuthUser(identity): OptionalAuthUser,
    query: ListQuery,
) -> ApiResult<Json<ApiResponse<Vec<BlogViewResponse>>>> {
    let service = BlogService::new(state.service_context());
    let views = service
        .list_blogs(
            ListBlogsParams {
                sort: query.sort,
                search: query.search,
                skip: query.skip,
                limit: query.limit,
            },
            identity,
        )
        .await?;
    Ok(Json(ApiResponse::new(views)))
}

/// Bulk blog views for a set of ids
///
/// `GET /api/v2/blogs/bulk?ids=1&ids=2`
pub async fn get_blogs_bulk(
    State(state): State<AppState>,
    OptionalAuthUser(identity): OptionalAuthUser,
    BulkIds(ids): BulkIds,
) -> ApiResult<Json<ApiResponse<Vec<BlogViewResponse>>>> {
    let service = BlogService::new(state.service_context());
    let views = service.get_blogs_bulk(&ids, identity).await?;
    Ok(Json(ApiResponse::new(views)))
}

/// Fetch a single blog view
///
/// `GET /api/v2/blogs/:blog_id`
pub async fn get_blog(
    State(state): State<AppState>,
    OptionalAuthUser(identity): OptionalAuthUser,
    Path(blog_id): Path<String>,
) -> ApiResult<Json<ApiResponse<BlogViewResponse>>> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let service = BlogService::new(state.service_context());
    let view = service.get_blog(blog_id, identity).await?;
    Ok(Json(ApiResponse::new(view)))
}

/// Update a blog
///
/// `PUT /api/v2/blogs/:blog_id`
pub async fn update_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(blog_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBlogRequest>,
) -> ApiResult<Json<ApiResponse<BlogViewResponse>>> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let service = BlogService::new(state.service_context());
    let view = service.update_blog(identity, blog_id, request).await?;
    Ok(Json(ApiResponse::new(view)))
}

/// Soft-delete a blog
///
/// `DELETE /api/v2/blogs/:blog_id`
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(blog_id): Path<String>,
) -> ApiResult<NoContent> {
    let blog_id = parse_id(&blog_id, "blog")?;
    let service = BlogService::new(state.service_context());
    service.delete_blog(identity, blog_id).await?;
    Ok(NoContent)
}
