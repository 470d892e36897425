//! Query parameter extractors
//!
//! Parses listing parameters and bulk identifier sets from query
//! strings. Malformed values reject with 400.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::{SortKey, Snowflake};
use serde::Deserialize;

use crate::response::ApiError;

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
struct RawListQuery {
    sort: Option<String>,
    search: Option<String>,
    skip: Option<usize>,
    limit: Option<usize>,
}

/// Parsed listing parameters for blog collection endpoints
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub sort: SortKey,
    pub search: Option<String>,
    pub skip: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            search: None,
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let sort = match raw.sort.as_deref() {
            None => SortKey::default(),
            Some(s) => s
                .parse::<SortKey>()
                .map_err(|_| ApiError::invalid_query(format!("unknown sort key: {s}")))?,
        };

        let search = raw
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            sort,
            search,
            skip: raw.skip.unwrap_or(0),
            limit: raw.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawBulkIds {
    #[serde(default)]
    ids: Vec<String>,
}

/// Parsed repeated `?ids=` query values for bulk endpoints
///
/// Order is preserved as given; deduplication happens downstream so
/// the cap applies to distinct identifiers.
#[derive(Debug, Clone)]
pub struct BulkIds(pub Vec<Snowflake>);

#[async_trait]
impl<S> FromRequestParts<S> for BulkIds
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum_extra::extract::Query(raw) =
            axum_extra::extract::Query::<RawBulkIds>::from_request_parts(parts, state)
                .await
                .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let ids = raw
            .ids
            .iter()
            .map(|s| {
                s.parse::<i64>()
                    .map(Snowflake::new)
                    .map_err(|_| ApiError::invalid_query(format!("invalid id: {s}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(ids))
    }
}
