//! Entity ↔ model mappers

mod blog;
mod comment;
mod reaction;
mod user;

pub(crate) use reaction::parse_emoji;
