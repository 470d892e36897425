//! Access policy - one pure decision function for every mutation path
//!
//! All role/ownership enforcement lives here so the blog, comment, and
//! reaction paths cannot drift apart. The policy is side-effect free and is
//! consulted before any write.

use bitflags::bitflags;

use crate::error::DomainError;
use crate::value_objects::{Role, Snowflake};

bitflags! {
    /// Actions a caller may perform against a single resource
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Action: u32 {
        /// Read a live blog and its comments/reactions
        const READ                = 1 << 0;
        /// Create a new blog
        const CREATE_BLOG         = 1 << 1;
        /// Edit the target blog
        const UPDATE_BLOG         = 1 << 2;
        /// Soft-delete the target blog
        const DELETE_BLOG         = 1 << 3;
        /// Comment on a live blog
        const CREATE_COMMENT      = 1 << 4;
        /// Edit the target comment
        const UPDATE_COMMENT      = 1 << 5;
        /// Soft-delete the target comment
        const DELETE_COMMENT      = 1 << 6;
        /// Add or replace own reaction on a live blog
        const UPSERT_REACTION     = 1 << 7;
        /// Remove own reaction
        const REMOVE_OWN_REACTION = 1 << 8;
        /// Remove any user's reaction
        const REMOVE_ANY_REACTION = 1 << 9;
    }
}

/// Compute the full action set permitted for `actor_id` with `actor_role`
/// against a resource owned by `owner_id`.
///
/// Ownership is identifier equality; the same function serves blogs,
/// comments, and reactions (pass the owner of whichever resource is being
/// mutated).
pub fn allowed_actions(actor_role: Role, actor_id: Snowflake, owner_id: Snowflake) -> Action {
    if actor_role.is_admin() {
        return Action::all();
    }

    // Every authenticated role participates in the social surface.
    let mut actions = Action::READ
        | Action::CREATE_COMMENT
        | Action::UPSERT_REACTION
        | Action::REMOVE_OWN_REACTION;

    if actor_role.can_author_blogs() {
        actions |= Action::CREATE_BLOG;
    }

    if actor_id == owner_id {
        // Owners mutate their own comments/reactions unconditionally;
        // blog mutation additionally requires an authoring role.
        actions |= Action::UPDATE_COMMENT | Action::DELETE_COMMENT;
        if actor_role.can_author_blogs() {
            actions |= Action::UPDATE_BLOG | Action::DELETE_BLOG;
        }
    }

    actions
}

/// Authorize a single action, returning `PermissionDenied` when the policy
/// does not grant it. Callers run this before touching any ledger.
pub fn authorize(
    actor_role: Role,
    actor_id: Snowflake,
    owner_id: Snowflake,
    action: Action,
) -> Result<(), DomainError> {
    if allowed_actions(actor_role, actor_id, owner_id).contains(action) {
        Ok(())
    } else {
        Err(DomainError::PermissionDenied(format!(
            "{action:?} not permitted for role {actor_role}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: Snowflake = Snowflake::new(1);
    const OTHER: Snowflake = Snowflake::new(2);

    #[test]
    fn test_reader_social_surface() {
        let actions = allowed_actions(Role::Reader, OTHER, OWNER);
        assert!(actions.contains(Action::READ | Action::CREATE_COMMENT));
        assert!(actions.contains(Action::UPSERT_REACTION | Action::REMOVE_OWN_REACTION));
        assert!(!actions.contains(Action::CREATE_BLOG));
        assert!(!actions.contains(Action::DELETE_COMMENT));
    }

    #[test]
    fn test_reader_cannot_delete_others_comment() {
        assert!(authorize(Role::Reader, OTHER, OWNER, Action::DELETE_COMMENT).is_err());
    }

    #[test]
    fn test_comment_owner_may_delete_own() {
        assert!(authorize(Role::Reader, OWNER, OWNER, Action::DELETE_COMMENT).is_ok());
    }

    #[test]
    fn test_writer_owns_blog_mutation() {
        assert!(authorize(Role::Writer, OWNER, OWNER, Action::UPDATE_BLOG).is_ok());
        assert!(authorize(Role::Writer, OWNER, OWNER, Action::DELETE_BLOG).is_ok());
        // Writers cannot touch someone else's blog
        assert!(authorize(Role::Writer, OTHER, OWNER, Action::UPDATE_BLOG).is_err());
    }

    #[test]
    fn test_reader_owner_still_cannot_author_blogs() {
        // A reader who somehow owns a blog row still lacks the authoring role
        assert!(authorize(Role::Reader, OWNER, OWNER, Action::UPDATE_BLOG).is_err());
    }

    #[test]
    fn test_admin_has_everything() {
        let actions = allowed_actions(Role::Admin, OTHER, OWNER);
        assert_eq!(actions, Action::all());
        assert!(authorize(Role::Admin, OTHER, OWNER, Action::REMOVE_ANY_REACTION).is_ok());
    }

    #[test]
    fn test_non_admin_cannot_remove_others_reaction() {
        assert!(authorize(Role::Writer, OTHER, OWNER, Action::REMOVE_ANY_REACTION).is_err());
    }
}
