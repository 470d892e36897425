//! PostgreSQL implementation of ReactionRepository
//!
//! The upsert leans on the UNIQUE (blog_id, user_id) constraint with
//! ON CONFLICT, so concurrent writers race at the row lock instead of
//! a read-then-write window.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Reaction;
use blog_core::traits::{ReactionRepository, ReactionRollup, RepoResult};
use blog_core::value_objects::{Emoji, Snowflake};

use crate::mappers::parse_emoji;
use crate::models::{ReactionModel, ReactionRollupModel, UserReactionModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, reaction))]
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        let row = sqlx::query_as::<_, ReactionModel>(
            r#"
            INSERT INTO reactions (id, blog_id, user_id, emoji, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (blog_id, user_id)
            DO UPDATE SET emoji = EXCLUDED.emoji, updated_at = EXCLUDED.updated_at
            RETURNING id, blog_id, user_id, emoji, created_at, updated_at
            "#,
        )
        .bind(reaction.id.into_inner())
        .bind(reaction.blog_id.into_inner())
        .bind(reaction.user_id.into_inner())
        .bind(reaction.emoji.as_str())
        .bind(reaction.created_at)
        .bind(reaction.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Reaction::try_from(row)
    }

    #[instrument(skip(self))]
    async fn remove(&self, blog_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE blog_id = $1 AND user_id = $2
            "#,
        )
        .bind(blog_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, blog_ids))]
    async fn find_by_blogs(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<Reaction>> {
        if blog_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = blog_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, blog_id, user_id, emoji, created_at, updated_at
            FROM reactions
            WHERE blog_id = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter()
            .map(Reaction::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    #[instrument(skip(self, blog_ids))]
    async fn summarize(&self, blog_ids: &[Snowflake]) -> RepoResult<Vec<ReactionRollup>> {
        if blog_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = blog_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, ReactionRollupModel>(
            r#"
            SELECT blog_id, emoji, COUNT(*) AS count
            FROM reactions
            WHERE blog_id = ANY($1)
            GROUP BY blog_id, emoji
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter()
            .map(|row| {
                Ok(ReactionRollup {
                    blog_id: Snowflake::new(row.blog_id),
                    emoji: parse_emoji(&row.emoji)?,
                    count: row.count,
                })
            })
            .collect()
    }

    #[instrument(skip(self, blog_ids))]
    async fn current_reactions(
        &self,
        blog_ids: &[Snowflake],
        user_id: Snowflake,
    ) -> RepoResult<Vec<(Snowflake, Emoji)>> {
        if blog_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = blog_ids.iter().map(|id| id.into_inner()).collect();

        let rows = sqlx::query_as::<_, UserReactionModel>(
            r#"
            SELECT blog_id, emoji
            FROM reactions
            WHERE blog_id = ANY($1) AND user_id = $2
            "#,
        )
        .bind(&raw_ids)
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter()
            .map(|row| Ok((Snowflake::new(row.blog_id), parse_emoji(&row.emoji)?)))
            .collect()
    }
}
