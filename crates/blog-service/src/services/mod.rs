//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod aggregate;
pub mod blog;
pub mod comment;
pub mod context;
pub mod error;
pub mod reaction;

// Re-export all services for convenience
pub use aggregate::{Aggregator, MAX_BULK_IDS};
pub use blog::{BlogService, ListBlogsParams};
pub use comment::CommentService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
