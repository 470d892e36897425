//! Comment entity <-> model mapper

use blog_core::entities::Comment;
use blog_core::value_objects::Snowflake;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            blog_id: Snowflake::new(model.blog_id),
            user_id: Snowflake::new(model.user_id),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted: model.deleted,
        }
    }
}
