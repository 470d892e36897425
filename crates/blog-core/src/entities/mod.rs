//! Domain entities - core business objects

mod blog;
mod comment;
mod reaction;
mod user;
mod view;

pub use blog::Blog;
pub use comment::Comment;
pub use reaction::Reaction;
pub use user::User;
pub use view::{BlogView, EmojiCount, ReactionSummary};
