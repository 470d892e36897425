//! Emoji value object - the closed set of reaction kinds

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Reaction emoji kind. Reactions outside this set are rejected at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emoji {
    Like,
    Love,
    Haha,
    Wow,
    Sad,
    Angry,
}

impl Emoji {
    /// All kinds, in display order
    pub const ALL: [Emoji; 6] = [
        Emoji::Like,
        Emoji::Love,
        Emoji::Haha,
        Emoji::Wow,
        Emoji::Sad,
        Emoji::Angry,
    ];

    /// Stable string form used in the database and on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Love => "love",
            Self::Haha => "haha",
            Self::Wow => "wow",
            Self::Sad => "sad",
            Self::Angry => "angry",
        }
    }

    /// Unicode code point of the rendered glyph (👍 ❤ 😂 😲 😢 😡)
    pub const fn code_point(self) -> u32 {
        match self {
            Self::Like => 128077,
            Self::Love => 10084,
            Self::Haha => 128514,
            Self::Wow => 128562,
            Self::Sad => 128546,
            Self::Angry => 128545,
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Emoji {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "love" => Ok(Self::Love),
            "haha" => Ok(Self::Haha),
            "wow" => Ok(Self::Wow),
            "sad" => Ok(Self::Sad),
            "angry" => Ok(Self::Angry),
            other => Err(DomainError::InvalidEmoji(other.to_string())),
        }
    }
}
