//! Authentication extractors
//!
//! Extracts and verifies the bearer token minted by the external
//! identity provider, resolving it to an [`Identity`].

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_common::Identity;

use crate::{response::ApiError, state::AppState};

/// Extractor for authenticated requests
///
/// Rejects the request with 401 when the Authorization header is
/// missing, malformed, or carries an invalid or expired token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let identity = app_state.token_verifier().verify_identity(bearer.token())?;

        Ok(Self(identity))
    }
}

/// Extractor for optionally-authenticated requests
///
/// Resolves to `None` when no Authorization header is present. A header
/// that is present but invalid still rejects with 401 rather than
/// silently downgrading to anonymous.
#[derive(Debug, Clone, Copy)]
pub struct OptionalAuthUser(pub Option<Identity>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
            return Ok(Self(None));
        }

        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;
        Ok(Self(Some(identity)))
    }
}
