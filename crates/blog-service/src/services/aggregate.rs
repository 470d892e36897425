//! View aggregator
//!
//! Composes `BlogView`s for a set of blog ids with a bounded number of
//! repository calls: one for the blogs, one for comment counts, one for
//! reaction summaries, and one for the requester's own reactions (skipped
//! when anonymous). The cost never depends on how many ids are requested.

use std::collections::{HashMap, HashSet};

use blog_core::entities::{Blog, BlogView, EmojiCount, ReactionSummary};
use blog_core::value_objects::{Emoji, Snowflake};
use blog_core::DomainError;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Upper bound on distinct ids per aggregation request
pub const MAX_BULK_IDS: usize = 100;

/// View aggregator over the blog, comment, and reaction ledgers
pub struct Aggregator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Aggregator<'a> {
    /// Create a new Aggregator
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Build views for the given ids, in request order.
    ///
    /// Unknown and soft-deleted ids are silently dropped: the result simply
    /// has no entry for them. Duplicate ids collapse to one entry. A
    /// deduplicated set larger than [`MAX_BULK_IDS`] is rejected before any
    /// fetch happens.
    #[instrument(skip(self, blog_ids), fields(requested = blog_ids.len()))]
    pub async fn build_views(
        &self,
        blog_ids: &[Snowflake],
        requester: Option<Snowflake>,
    ) -> ServiceResult<Vec<BlogView>> {
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
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let blogs = self.ctx.blog_repo().find_by_ids(&ids).await?;
        if blogs.is_empty() {
            return Ok(Vec::new());
        }

        // Counts are keyed on the fetched blog set, never the requested one,
        // so a deleted blog can't leak through its surviving ledger rows.
        let fetched_ids: Vec<Snowflake> = blogs.iter().map(|b| b.id).collect();

        let comment_counts = self.ctx.comment_repo().count_by_blogs(&fetched_ids).await?;
        let rollups = self.ctx.reaction_repo().summarize(&fetched_ids).await?;
        let own_reactions = match requester {
            Some(user_id) => {
                self.ctx
                    .reaction_repo()
                    .current_reactions(&fetched_ids, user_id)
                    .await?
            }
            None => Vec::new(),
        };

        let count_map: HashMap<Snowflake, i64> = comment_counts.into_iter().collect();
        let own_map: HashMap<Snowflake, Emoji> = own_reactions.into_iter().collect();

        let mut summary_map: HashMap<Snowflake, Vec<EmojiCount>> = HashMap::new();
        for rollup in rollups {
            summary_map.entry(rollup.blog_id).or_default().push(EmojiCount {
                emoji: rollup.emoji,
                count: rollup.count,
            });
        }

        let mut blog_map: HashMap<Snowflake, Blog> =
            blogs.into_iter().map(|b| (b.id, b)).collect();

        let views = ids
            .into_iter()
            .filter_map(|id| {
                let blog = blog_map.remove(&id)?;
                let comment_count = count_map.get(&id).copied().unwrap_or(0);
                let summary = ReactionSummary::from_counts(
                    summary_map.remove(&id).unwrap_or_default(),
                );
                let own = own_map.get(&id).copied();
                Some(BlogView::new(blog, comment_count, summary, own, requester))
            })
            .collect();

        Ok(views)
    }

    /// Build the view for a single blog, or None when it is unknown/deleted
    pub async fn build_view(
        &self,
        blog_id: Snowflake,
        requester: Option<Snowflake>,
    ) -> ServiceResult<Option<BlogView>> {
        let mut views = self.build_views(&[blog_id], requester).await?;
        Ok(views.pop())
    }

    /// Build views for already-fetched blogs (saves the blog query when the
    /// caller just listed them)
    #[instrument(skip(self, blogs), fields(count = blogs.len()))]
    pub async fn build_views_for(
        &self,
        blogs: Vec<Blog>,
        requester: Option<Snowflake>,
    ) -> ServiceResult<Vec<BlogView>> {
        if blogs.is_empty() {
            return Ok(Vec::new());
        }

        let fetched_ids: Vec<Snowflake> = blogs.iter().map(|b| b.id).collect();

        let comment_counts = self.ctx.comment_repo().count_by_blogs(&fetched_ids).await?;
        let rollups = self.ctx.reaction_repo().summarize(&fetched_ids).await?;
        let own_reactions = match requester {
            Some(user_id) => {
                self.ctx
                    .reaction_repo()
                    .current_reactions(&fetched_ids, user_id)
                    .await?
            }
            None => Vec::new(),
        };

        let count_map: HashMap<Snowflake, i64> = comment_counts.into_iter().collect();
        let own_map: HashMap<Snowflake, Emoji> = own_reactions.into_iter().collect();

        let mut summary_map: HashMap<Snowflake, Vec<EmojiCount>> = HashMap::new();
        for rollup in rollups {
            summary_map.entry(rollup.blog_id).or_default().push(EmojiCount {
                emoji: rollup.emoji,
                count: rollup.count,
            });
        }

        let views = blogs
            .into_iter()
            .map(|blog| {
                let id = blog.id;
                let comment_count = count_map.get(&id).copied().unwrap_or(0);
                let summary = ReactionSummary::from_counts(
                    summary_map.remove(&id).unwrap_or_default(),
                );
                let own = own_map.get(&id).copied();
                BlogView::new(blog, comment_count, summary, own, requester)
            })
            .collect();

        Ok(views)
    }
}
