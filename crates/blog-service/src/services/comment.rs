//! Comment service
//!
//! Comment lifecycle against the comment ledger. Comments soft-delete like
//! blogs; deleted rows drop out of counts and listings but stay in storage.

use std::collections::HashMap;

use blog_common::auth::Identity;
use blog_core::entities::Comment;
use blog_core::{authorize, Action, DomainError, Snowflake};
use chrono::Utc;
use tracing::{info, instrument};

use crate::dto::responses::BulkCommentsResponse;
use crate::dto::{CommentResponse, CreateCommentRequest, UpdateCommentRequest, UserResponse};

use super::aggregate::MAX_BULK_IDS;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to a live blog
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        actor: Identity,
        blog_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;

        authorize(actor.role, actor.user_id, blog.user_id, Action::CREATE_COMMENT)?;

        if request.content.trim().is_empty() {
            return Err(DomainError::EmptyBody.into());
        }

        let comment = Comment::new(
            self.ctx.generate_id(),
            blog_id,
            actor.user_id,
            request.content,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, blog_id = %blog_id, "Comment added");

        let author = self.ctx.user_repo().find_by_id(actor.user_id).await?;
        let mut response = CommentResponse::from(&comment);
        if let Some(author) = author {
            response = response.with_author(UserResponse::from(&author));
        }
        Ok(response)
    }

    /// Update a comment (author or admin)
    #[instrument(skip(self, request))]
    pub async fn update_comment(
        &self,
        actor: Identity,
        blog_id: Snowflake,
        comment_id: Snowflake,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.find_on_blog(blog_id, comment_id).await?;

        authorize(actor.role, actor.user_id, comment.user_id, Action::UPDATE_COMMENT)?;

        if request.content.trim().is_empty() {
            return Err(DomainError::EmptyBody.into());
        }

        comment.edit(request.content);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment.id, actor = %actor.user_id, "Comment updated");
        Ok(CommentResponse::from(&comment))
    }

    /// Soft-delete a comment (author or admin)
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        actor: Identity,
        blog_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self.find_on_blog(blog_id, comment_id).await?;

        authorize(actor.role, actor.user_id, comment.user_id, Action::DELETE_COMMENT)?;

        if !self
            .ctx
            .comment_repo()
            .soft_delete(comment_id, Utc::now())
            .await?
        {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        info!(comment_id = %comment_id, actor = %actor.user_id, "Comment deleted");
        Ok(())
    }

    /// Live comments on one blog, oldest first, authors embedded
    #[instrument(skip(self))]
    pub async fn list_comments(&self, blog_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        self.ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;

        let comments = self.ctx.comment_repo().find_by_blog(blog_id).await?;
        self.with_authors(comments).await
    }

    /// Bulk comments across an id set: one entry per live requested blog,
    /// including blogs with no comments. Unknown/deleted ids are dropped.
    #[instrument(skip(self, blog_ids))]
    pub async fn bulk_comments(&self, blog_ids: &[Snowflake]) -> ServiceResult<BulkCommentsResponse> {
        let mut seen = std::collections::HashSet::new();
        let ids: Vec<Snowflake> = blog_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        if ids.len() > MAX_BULK_IDS {
            return Err(DomainError::BulkSetTooLarge {
                max: MAX_BULK_IDS,
                got: ids.len(),
            }
            .into());
        }

        let blogs = self.ctx.blog_repo().find_by_ids(&ids).await?;
        let live_ids: Vec<Snowflake> = blogs.iter().map(|b| b.id).collect();
        let comments = self.ctx.comment_repo().find_by_blogs(&live_ids).await?;
        let responses = self.with_authors(comments).await?;

        let mut grouped: BulkCommentsResponse = live_ids
            .iter()
            .map(|id| (id.to_string(), Vec::new()))
            .collect();
        for response in responses {
            if let Some(bucket) = grouped.get_mut(&response.blog_id) {
                bucket.push(response);
            }
        }
        Ok(grouped)
    }

    /// Resolve a live comment and verify it belongs to the routed blog
    async fn find_on_blog(
        &self,
        blog_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<Comment> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if comment.blog_id != blog_id {
            return Err(ServiceError::not_found("Comment", comment_id.to_string()));
        }
        Ok(comment)
    }

    /// Attach authors with one grouped user fetch
    async fn with_authors(&self, comments: Vec<Comment>) -> ServiceResult<Vec<CommentResponse>> {
        let mut author_ids: Vec<Snowflake> = comments.iter().map(|c| c.user_id).collect();
        author_ids.sort_unstable_by_key(|id| id.into_inner());
        author_ids.dedup();

        let authors = self.ctx.user_repo().find_by_ids(&author_ids).await?;
        let author_map: HashMap<Snowflake, UserResponse> = authors
            .iter()
            .map(|u| (u.id, UserResponse::from(u)))
            .collect();

        Ok(comments
            .iter()
            .map(|comment| {
                let response = CommentResponse::from(comment);
                match author_map.get(&comment.user_id) {
                    Some(author) => response.with_author(author.clone()),
                    None => response,
                }
            })
            .collect())
    }
}
