//! Path parameter extractor for user ids

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::ApiError;

/// The `{id}` path segment parsed as an integer.
///
/// Anything that is not a base-10 `i64` is rejected with
/// [`ApiError::InvalidRequest`] before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| ApiError::invalid_id())
    }
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::invalid_id())?;

        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers() {
        assert_eq!(UserId::parse("1").unwrap(), UserId(1));
        assert_eq!(UserId::parse("-7").unwrap(), UserId(-7));
        assert_eq!(UserId::parse("+42").unwrap(), UserId(42));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", "abc", "1.5", "1e3", " 1", "0x10", "99999999999999999999"] {
            assert!(
                matches!(UserId::parse(raw), Err(ApiError::InvalidRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
