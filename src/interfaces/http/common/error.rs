//! API error type
//!
//! The HTTP surface distinguishes malformed input from missing
//! resources. Both render as a status code plus a JSON string message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const INVALID_ID_MESSAGE: &str = "Invalid ID format";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path parameter or body; the client must fix its input.
    #[error("{0}")]
    InvalidRequest(&'static str),

    /// Well-formed id with no matching resource.
    #[error("{0}")]
    NotFound(&'static str),
}

impl ApiError {
    pub fn invalid_id() -> Self {
        Self::InvalidRequest(INVALID_ID_MESSAGE)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidRequest(INVALID_BODY_MESSAGE)
    }

    pub fn user_not_found() -> Self {
        Self::NotFound(USER_NOT_FOUND_MESSAGE)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_status_and_json_string_message() {
        let resp = ApiError::user_not_found().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#""User not found""#);
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        assert_eq!(ApiError::invalid_id().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::invalid_body().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::invalid_id().to_string(), "Invalid ID format");
    }
}
