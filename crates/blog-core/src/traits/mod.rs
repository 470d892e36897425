//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BlogListQuery, BlogRepository, CommentRepository, ReactionRepository, ReactionRollup,
    RepoResult, UserRepository,
};
