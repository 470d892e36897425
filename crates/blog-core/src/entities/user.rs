//! User entity - a verified account surfaced by the identity provider

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, Snowflake};

/// User entity. Credentials live with the identity provider; only the
/// verified profile is modeled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, username: String, email: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            role,
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this user owns a resource created by `owner_id`
    #[inline]
    pub fn owns(&self, owner_id: Snowflake) -> bool {
        self.id == owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            Snowflake::new(1),
            "alice".to_string(),
            "alice@example.com".to_string(),
            Role::Writer,
        );
        assert_eq!(user.role, Role::Writer);
        assert!(!user.verified);
    }

    #[test]
    fn test_ownership() {
        let user = User::new(
            Snowflake::new(7),
            "bob".to_string(),
            "bob@example.com".to_string(),
            Role::Reader,
        );
        assert!(user.owns(Snowflake::new(7)));
        assert!(!user.owns(Snowflake::new(8)));
    }
}
