//! Value objects - immutable domain primitives

mod emoji;
mod role;
mod snowflake;

pub use emoji::Emoji;
pub use role::Role;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
