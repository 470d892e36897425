//! Custom Axum extractors
//!
//! Provides extractors for authentication, request validation, and
//! query parameter parsing.

pub mod auth;
pub mod query;
pub mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use query::{BulkIds, ListQuery};
pub use validated::ValidatedJson;
