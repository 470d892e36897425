//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Blog;
use blog_core::traits::{BlogListQuery, BlogRepository, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::models::BlogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BlogRepository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    /// Create a new PgBlogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at, deleted
            FROM blogs
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self, ids))]
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Blog>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at, deleted
            FROM blogs
            WHERE id = ANY($1) AND deleted = FALSE
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Blog::from).collect())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: BlogListQuery) -> RepoResult<Vec<Blog>> {
        let limit = query.limit.clamp(1, 100);
        let skip = query.skip.max(0);

        let results = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at, deleted
            FROM blogs
            WHERE deleted = FALSE
              AND ($1::TEXT IS NULL OR title ILIKE '%' || $1 || '%')
            ORDER BY created_at DESC, id DESC
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(query.search)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Blog::from).collect())
    }

    #[instrument(skip(self, blog))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, user_id, title, content, created_at, updated_at, deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(blog.id.into_inner())
        .bind(blog.user_id.into_inner())
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .bind(blog.deleted)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, blog))]
    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE blogs
            SET title = $2, content = $3, updated_at = $4
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(blog.id.into_inner())
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
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
