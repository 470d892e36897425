//! Database models - SQLx-compatible structs for PostgreSQL tables

mod blog;
mod comment;
mod reaction;
mod user;

pub use blog::BlogModel;
pub use comment::{CommentCountModel, CommentModel};
pub use reaction::{ReactionModel, ReactionRollupModel, UserReactionModel};
pub use user::UserModel;
