//! Blog entity <-> model mapper

use blog_core::entities::Blog;
use blog_core::value_objects::Snowflake;

use crate::models::BlogModel;

impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted: model.deleted,
        }
    }
}
