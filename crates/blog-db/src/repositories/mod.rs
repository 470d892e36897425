//! PostgreSQL repository implementations

mod blog;
mod comment;
mod error;
mod reaction;
mod user;

pub use blog::PgBlogRepository;
pub use comment::PgCommentRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
