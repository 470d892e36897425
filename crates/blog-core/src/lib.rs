//! # blog-core
//!
//! Domain layer containing entities, value objects, repository traits, the
//! access policy, and the sort planner. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod ordering;
pub mod policy;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Blog, BlogView, Comment, EmojiCount, Reaction, ReactionSummary, User};
pub use error::DomainError;
pub use ordering::{page, sort_views, SortKey};
pub use policy::{allowed_actions, authorize, Action};
pub use traits::{
    BlogListQuery, BlogRepository, CommentRepository, ReactionRepository, ReactionRollup,
    RepoResult, UserRepository,
};
pub use value_objects::{Emoji, Role, Snowflake, SnowflakeGenerator, SnowflakeParseError};
