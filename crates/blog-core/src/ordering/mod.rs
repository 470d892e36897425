//! Sort & page planner - deterministic ordering over aggregated views
//!
//! Operates purely in memory on views already produced by the aggregator;
//! it never triggers additional fetches. Every key shares the same
//! tie-break (created_at DESC, then id DESC) so the ordering is total and
//! pagination is stable across requests.

use std::cmp::Ordering;
use std::fmt;

use crate::entities::BlogView;
use crate::error::DomainError;

/// Supported listing sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Creation timestamp descending
    #[default]
    Newest,
    /// Live comment count descending
    MostCommented,
    /// Live reaction total descending
    MostReacted,
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::MostCommented => "most_commented",
            Self::MostReacted => "most_reacted",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "most_commented" => Ok(Self::MostCommented),
            "most_reacted" => Ok(Self::MostReacted),
            other => Err(DomainError::ValidationError(format!(
                "unknown sort key: {other}"
            ))),
        }
    }
}

/// Order views by the requested key with the universal tie-break
pub fn sort_views(views: &mut [BlogView], key: SortKey) {
    views.sort_by(|a, b| compare(a, b, key));
}

/// Apply offset/limit windowing after sorting
pub fn page<T>(items: Vec<T>, skip: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(skip).take(limit).collect()
}

fn compare(a: &BlogView, b: &BlogView, key: SortKey) -> Ordering {
    let primary = match key {
        SortKey::Newest => Ordering::Equal,
        SortKey::MostCommented => b.comment_count.cmp(&a.comment_count),
        SortKey::MostReacted => b.reactions.total.cmp(&a.reactions.total),
    };
    primary
        .then_with(|| b.blog.created_at.cmp(&a.blog.created_at))
        .then_with(|| b.blog.id.cmp(&a.blog.id))
}
