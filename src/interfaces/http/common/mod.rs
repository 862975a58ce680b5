//! Shared HTTP building blocks: the error type and request extractors

pub mod error;
pub mod json_body;
pub mod user_id;

pub use error::ApiError;
pub use json_body::JsonBody;
pub use user_id::UserId;
