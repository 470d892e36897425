//! Access-token validation using the `jsonwebtoken` crate

use blog_core::{Role, Snowflake};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims as minted by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Role assigned by the identity provider
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Resolve the verified identity pair from the claims
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as a Snowflake
    pub fn identity(&self) -> Result<Identity, AppError> {
        let user_id = self
            .sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)?;
        Ok(Identity {
            user_id,
            role: self.role,
        })
    }
}

/// The verified `(user_id, role)` pair carried through every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Snowflake,
    pub role: Role,
}

impl Identity {
    pub const fn new(user_id: Snowflake, role: Role) -> Self {
        Self { user_id, role }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Validates access tokens issued by the identity provider
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
}

impl TokenVerifier {
    /// Create a verifier for the shared token secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Decode and validate a token, returning its claims
    ///
    /// # Errors
    /// Returns an error if the token is malformed, tampered, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;
        Ok(token_data.claims)
    }

    /// Validate a token and resolve its identity in one step
    pub fn verify_identity(&self, token: &str) -> Result<Identity, AppError> {
        self.verify(token)?.identity()
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    fn mint(sub: &str, role: Role, expires_in: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            role,
            iat: now,
            exp: now + expires_in,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_verify_valid_token() {
        let verifier = TokenVerifier::new(SECRET);
        let identity = verifier
            .verify_identity(&mint("12345", Role::Writer, 900))
            .unwrap();
        assert_eq!(identity.user_id, Snowflake::new(12345));
        assert_eq!(identity.role, Role::Writer);
    }

    #[test]
    fn test_expired_token() {
        let verifier = TokenVerifier::new(SECRET);
        let err = verifier
            .verify(&mint("12345", Role::Reader, -3600))
            .unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn test_wrong_secret() {
        let verifier = TokenVerifier::new("a-completely-different-secret");
        let err = verifier.verify(&mint("12345", Role::Admin, 900)).unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn test_non_numeric_subject() {
        let verifier = TokenVerifier::new(SECRET);
        let err = verifier
            .verify_identity(&mint("not-an-id", Role::Reader, 900))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
