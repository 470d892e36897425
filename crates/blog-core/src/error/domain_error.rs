//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Blog not found: {0}")]
    BlogNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid emoji kind: {0}")]
    InvalidEmoji(String),

    #[error("Body must not be empty")]
    EmptyBody,

    #[error("Too many identifiers in bulk request: max {max}, got {got}")]
    BulkSetTooLarge { max: usize, got: usize },

    // =========================================================================
    // Conflict Errors (resolved internally by upsert semantics, kept for
    // completeness of the taxonomy)
    // =========================================================================
    #[error("Conflict: {0}")]
    Conflict(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BlogNotFound(_) => "UNKNOWN_BLOG",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Authorization
            Self::PermissionDenied(_) => "PERMISSION_DENIED",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmoji(_) => "INVALID_EMOJI",
            Self::EmptyBody => "EMPTY_BODY",
            Self::BulkSetTooLarge { .. } => "BULK_SET_TOO_LARGE",

            // Conflict
            Self::Conflict(_) => "CONFLICT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::BlogNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmoji(_)
                | Self::EmptyBody
                | Self::BulkSetTooLarge { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }

    /// Shorthand for a permission denial with a reason
    pub fn permission_denied(reason: impl Into<String>) -> Self {
        Self::PermissionDenied(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::BlogNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_BLOG");

        let err = DomainError::InvalidEmoji("grin".to_string());
        assert_eq!(err.code(), "INVALID_EMOJI");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::BlogNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommentNotFound(Snowflake::new(2)).is_not_found());
        assert!(!DomainError::EmptyBody.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::EmptyBody.is_validation());
        assert!(DomainError::BulkSetTooLarge { max: 100, got: 250 }.is_validation());
        assert!(!DomainError::permission_denied("nope").is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::BlogNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Blog not found: 123");

        let err = DomainError::BulkSetTooLarge { max: 100, got: 300 };
        assert_eq!(
            err.to_string(),
            "Too many identifiers in bulk request: max 100, got 300"
        );
    }
}
