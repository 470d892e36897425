//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Comment;
use blog_core::traits::{CommentRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::{CommentCountModel, CommentModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, blog_id, user_id, content, created_at, updated_at, deleted
            FROM comments
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_blog(&self, blog_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, blog_id, user_id, content, created_at, updated_at, deleted
            FROM comments
            WHERE blog_id = $1 AND deleted = FALSE
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(blog_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, blog_ids))]
    async fn find_by_blogs(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<Comment>> {
        if blog_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = blog_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, CommentModel>(
            r#"
            SELECT id, blog_id, user_id, content, created_at, updated_at, deleted
            FROM comments
            WHERE blog_id = ANY($1) AND deleted = FALSE
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, blog_ids))]
    async fn count_by_blogs(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<(Snowflake, i64)>> {
        if blog_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = blog_ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, CommentCountModel>(
            r#"
            SELECT blog_id, COUNT(*) AS count
            FROM comments
            WHERE blog_id = ANY($1) AND deleted = FALSE
            GROUP BY blog_id
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (Snowflake::new(row.blog_id), row.count))
            .collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, blog_id, user_id, content, created_at, updated_at, deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(comment.blog_id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .bind(comment.deleted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, comment))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE comments
            SET content = $2, updated_at = $3
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(comment.id.into_inner())
        .bind(&comment.content)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET deleted = TRUE, updated_at = $2
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id.into_inner())
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
