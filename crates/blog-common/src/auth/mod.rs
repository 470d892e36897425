//! Identity-provider boundary
//!
//! Token issuance lives with the external identity provider; this module
//! only validates access tokens and surfaces the verified `(user_id, role)`
//! pair the rest of the system trusts.

mod token;

pub use token::{Claims, Identity, TokenVerifier};
