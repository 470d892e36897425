//! User entity <-> model mapper

use blog_core::entities::User;
use blog_core::error::DomainError;
use blog_core::value_objects::{Role, Snowflake};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model.role.parse::<Role>().map_err(|_| {
            DomainError::InternalError(format!("invalid role stored in database: {}", model.role))
        })?;
        Ok(User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            role,
            verified: model.verified,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
