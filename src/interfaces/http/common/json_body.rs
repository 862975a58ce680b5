//! JSON body extractor for Axum
//!
//! `JsonBody<T>` works like `axum::Json<T>`, but every rejection (bad
//! syntax, wrong shape, missing `Content-Type`) is reported as
//! [`ApiError::InvalidRequest`] with a 400 status.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use super::ApiError;

/// An extractor that deserializes the request body as JSON.
///
/// ```ignore
/// async fn handler(JsonBody(body): JsonBody<CreateUserRequest>) {
///     // `body` has the shape of `CreateUserRequest`
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
                ApiError::invalid_body()
            })?;

        Ok(JsonBody(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
