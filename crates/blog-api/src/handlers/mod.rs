//! HTTP request handlers

pub mod blogs;
pub mod comments;
pub mod health;
pub mod reactions;

use blog_core::Snowflake;

use crate::response::ApiError;

/// Parse a path segment into a Snowflake, rejecting with 400 on failure
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<Snowflake, ApiError> {
    raw.parse::<Snowflake>()
        .map_err(|_| ApiError::invalid_path(format!("invalid {what} id: {raw}")))
}
