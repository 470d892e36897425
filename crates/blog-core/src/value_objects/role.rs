//! Role value object - coarse-grained user capability level

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// User role, assigned by the identity provider and immutable here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May read blogs and add comments/reactions
    #[default]
    Reader,
    /// Reader capabilities plus authoring own blogs
    Writer,
    /// Full mutation rights over any resource
    Admin,
}

impl Role {
    /// Stable string form used in the database and in token claims
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reader => "reader",
            Self::Writer => "writer",
            Self::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may create blogs at all
    #[inline]
    pub const fn can_author_blogs(self) -> bool {
        matches!(self, Self::Writer | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reader" => Ok(Self::Reader),
            "writer" => Ok(Self::Writer),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::ValidationError(format!(
                "unknown role: {other}"
            ))),
        }
    }
}
