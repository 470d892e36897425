//! Reaction entity <-> model mapper
//!
//! The emoji column is constrained in the schema, so a parse failure here
//! means stored data is corrupt and surfaces as an internal error.

use blog_core::entities::Reaction;
use blog_core::error::DomainError;
use blog_core::value_objects::{Emoji, Snowflake};

use crate::models::ReactionModel;

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let emoji = parse_emoji(&model.emoji)?;
        Ok(Reaction {
            id: Snowflake::new(model.id),
            blog_id: Snowflake::new(model.blog_id),
            user_id: Snowflake::new(model.user_id),
            emoji,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Parse a stored emoji column value
pub(crate) fn parse_emoji(value: &str) -> Result<Emoji, DomainError> {
    value
        .parse::<Emoji>()
        .map_err(|_| DomainError::InternalError(format!("invalid emoji stored in database: {value}")))
}
