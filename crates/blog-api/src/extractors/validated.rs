//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies using the validator crate.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON extractor that validates the deserialized body
///
/// Deserialization failures and validation failures both reject with
/// 422 and a structured error body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;

        value.validate()?;

        Ok(Self(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            ApiError::Service(blog_service::services::ServiceError::validation(format!(
                "Invalid request body: {e}"
            )))
        }
        JsonRejection::JsonSyntaxError(e) => {
            ApiError::Service(blog_service::services::ServiceError::validation(format!(
                "Malformed JSON: {e}"
            )))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::Service(
            blog_service::services::ServiceError::validation("Expected Content-Type: application/json"),
        ),
        other => ApiError::internal(anyhow::anyhow!("JSON extraction failed: {other}")),
    }
}
