//! Reaction service
//!
//! One reaction per (blog, user); setting a new emoji replaces the old one
//! in a single atomic upsert, and removal is idempotent.

use std::collections::{HashMap, HashSet};

use blog_common::auth::Identity;
use blog_core::entities::{EmojiCount, Reaction, ReactionSummary};
use blog_core::{authorize, Action, DomainError, Emoji, Snowflake};
use tracing::{info, instrument};

use crate::dto::responses::BulkReactionsResponse;
use crate::dto::{
    BlogReactionsResponse, ReactionResponse, ReactionSummaryResponse, UpsertReactionRequest,
};

use super::aggregate::MAX_BULK_IDS;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set the caller's reaction on a live blog, replacing any previous one
    #[instrument(skip(self, request))]
    pub async fn upsert_reaction(
        &self,
        actor: Identity,
        blog_id: Snowflake,
        request: UpsertReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let emoji = request.emoji.parse::<Emoji>()?;

        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;

        authorize(actor.role, actor.user_id, blog.user_id, Action::UPSERT_REACTION)?;

        let reaction = Reaction::new(self.ctx.generate_id(), blog_id, actor.user_id, emoji);
        let stored = self.ctx.reaction_repo().upsert(&reaction).await?;

        info!(blog_id = %blog_id, user_id = %actor.user_id, emoji = %emoji.as_str(), "Reaction set");
        Ok(ReactionResponse::from(&stored))
    }

    /// Remove a reaction. Defaults to the caller's own; admins may name
    /// another user. Removing an absent reaction succeeds without effect.
    #[instrument(skip(self))]
    pub async fn remove_reaction(
        &self,
        actor: Identity,
        blog_id: Snowflake,
        target_user: Option<Snowflake>,
    ) -> ServiceResult<bool> {
        let target = target_user.unwrap_or(actor.user_id);

        self.ctx
            .blog_repo()
            .find_by_id(blog_id)
            .await?
            .ok_or(DomainError::BlogNotFound(blog_id))?;

        let action = if target == actor.user_id {
            Action::REMOVE_OWN_REACTION
        } else {
            Action::REMOVE_ANY_REACTION
        };
        authorize(actor.role, actor.user_id, target, action)?;

        let removed = self.ctx.reaction_repo().remove(blog_id, target).await?;
        if removed {
            info!(blog_id = %blog_id, target = %target, "Reaction removed");
        }
        Ok(removed)
    }

    /// Bulk reaction state across an id set: raw reactions, summary, and the
    /// requester's own reaction per live blog. Unknown/deleted ids dropped.
    #[instrument(skip(self, blog_ids))]
    pub async fn bulk_reactions(
        &self,
        blog_ids: &[Snowflake],
        requester: Option<Identity>,
    ) -> ServiceResult<BulkReactionsResponse> {
        let mut seen = HashSet::new();
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

        let reactions = self.ctx.reaction_repo().find_by_blogs(&live_ids).await?;
        let rollups = self.ctx.reaction_repo().summarize(&live_ids).await?;
        let own = match requester {
            Some(identity) => {
                self.ctx
                    .reaction_repo()
                    .current_reactions(&live_ids, identity.user_id)
                    .await?
            }
            None => Vec::new(),
        };

        let mut reaction_map: HashMap<Snowflake, Vec<ReactionResponse>> = HashMap::new();
        for reaction in &reactions {
            reaction_map
                .entry(reaction.blog_id)
                .or_default()
                .push(ReactionResponse::from(reaction));
        }

        let mut summary_map: HashMap<Snowflake, Vec<EmojiCount>> = HashMap::new();
        for rollup in rollups {
            summary_map.entry(rollup.blog_id).or_default().push(EmojiCount {
                emoji: rollup.emoji,
                count: rollup.count,
            });
        }

        let own_map: HashMap<Snowflake, Emoji> = own.into_iter().collect();

        let result = live_ids
            .into_iter()
            .map(|id| {
                let summary =
                    ReactionSummary::from_counts(summary_map.remove(&id).unwrap_or_default());
                let item = BlogReactionsResponse {
                    reactions: reaction_map.remove(&id).unwrap_or_default(),
                    summary: ReactionSummaryResponse::from(&summary),
                    current_user_reaction: own_map.get(&id).map(|e| e.as_str().to_string()),
                };
                (id.to_string(), item)
            })
            .collect();

        Ok(result)
    }
}
