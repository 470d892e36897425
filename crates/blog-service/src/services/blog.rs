//! Blog service
//!
//! Handles blog CRUD and listing; every mutation returns a freshly
//! aggregated view so the caller observes its own write.

use blog_common::auth::Identity;
use blog_core::entities::Blog;
use blog_core::traits::BlogListQuery;
use blog_core::{authorize, page, sort_views, Action, Snowflake, SortKey};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::{BlogViewResponse, CreateBlogRequest, UpdateBlogRequest};

use super::aggregate::{Aggregator, MAX_BULK_IDS};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Listing parameters after query-string parsing
#[derive(Debug, Clone, Default)]
pub struct ListBlogsParams {
    pub sort: SortKey,
    pub search: Option<String>,
    pub skip: usize,
    pub limit: usize,
}

/// Blog service
pub struct BlogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BlogService<'a> {
    /// Create a new BlogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a blog (writer/admin only)
    #[instrument(skip(self, request))]
    pub async fn create_blog(
        &self,
        actor: Identity,
        request: CreateBlogRequest,
    ) -> ServiceResult<BlogViewResponse> {
        authorize(actor.role, actor.user_id, actor.user_id, Action::CREATE_BLOG)?;

        let blog = Blog::new(
            self.ctx.generate_id(),
            actor.user_id,
            request.title,
            request.content,
        );
        self.ctx.blog_repo().create(&blog).await?;

        info!(blog_id = %blog.id, author = %actor.user_id, "Blog created");

        self.view_of(blog.id, Some(actor)).await
    }

    /// Fetch a single blog view
    #[instrument(skip(self))]
    pub async fn get_blog(
        &self,
        blog_id: Snowflake,
        requester: Option<Identity>,
    ) -> ServiceResult<BlogViewResponse> {
        self.view_of(blog_id, requester).await
    }

    /// List blogs with optional title filter, sorted and paged in memory.
    ///
    /// The candidate window is the newest `MAX_BULK_IDS` matching blogs;
    /// sort key and skip/limit apply to the aggregated views of that window.
    #[instrument(skip(self))]
    pub async fn list_blogs(
        &self,
        params: ListBlogsParams,
        requester: Option<Identity>,
    ) -> ServiceResult<Vec<BlogViewResponse>> {
        let candidates = self
            .ctx
            .blog_repo()
            .list(BlogListQuery {
                search: params.search,
                skip: 0,
                limit: MAX_BULK_IDS as i64,
            })
            .await?;

        let aggregator = Aggregator::new(self.ctx);
        let mut views = aggregator
            .build_views_for(candidates, requester.map(|r| r.user_id))
            .await?;

        sort_views(&mut views, params.sort);
        let window = page(views, params.skip, params.limit.clamp(1, MAX_BULK_IDS));

        Ok(window.iter().map(BlogViewResponse::from).collect())
    }

    /// Update a blog (owner with authoring role, or admin)
    #[instrument(skip(self, request))]
    pub async fn update_blog(
        &self,
        actor: Identity,
        blog_id: Snowflake,
        request: UpdateBlogRequest,
    ) -> ServiceResult<BlogViewResponse> {
        let mut blog = self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", blog_id.to_string()))?;

        authorize(actor.role, actor.user_id, blog.user_id, Action::UPDATE_BLOG)?;

        blog.edit(request.title, request.content);
        self.ctx.blog_repo().update(&blog).await?;

        info!(blog_id = %blog.id, actor = %actor.user_id, "Blog updated");

        self.view_of(blog.id, Some(actor)).await
    }

    /// Soft-delete a blog (owner with authoring role, or admin)
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, actor: Identity, blog_id: Snowflake) -> ServiceResult<()> {
        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", blog_id.to_string()))?;

        authorize(actor.role, actor.user_id, blog.user_id, Action::DELETE_BLOG)?;

        if !self.ctx.blog_repo().soft_delete(blog_id, Utc::now()).await? {
            // Lost a race with another delete
            return Err(ServiceError::not_found("Blog", blog_id.to_string()));
        }

        info!(blog_id = %blog_id, actor = %actor.user_id, "Blog deleted");
        Ok(())
    }

    /// Bulk views for an id set; unknown/deleted ids are dropped from the
    /// result rather than failing the whole request
    #[instrument(skip(self, blog_ids))]
    pub async fn get_blogs_bulk(
        &self,
        blog_ids: &[Snowflake],
        requester: Option<Identity>,
    ) -> ServiceResult<Vec<BlogViewResponse>> {
        let aggregator = Aggregator::new(self.ctx);
        let views = aggregator
            .build_views(blog_ids, requester.map(|r| r.user_id))
            .await?;
        Ok(views.iter().map(BlogViewResponse::from).collect())
    }

    async fn view_of(
        &self,
        blog_id: Snowflake,
        requester: Option<Identity>,
    ) -> ServiceResult<BlogViewResponse> {
        let aggregator = Aggregator::new(self.ctx);
        let view = aggregator
            .build_view(blog_id, requester.map(|r| r.user_id))
            .await?
            .ok_or_else(|| ServiceError::not_found("Blog", blog_id.to_string()))?;
        Ok(BlogViewResponse::from(&view))
    }
}
