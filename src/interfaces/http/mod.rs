//! HTTP REST API interfaces
//!
//! - `common`: error type and request extractors
//! - `modules`: handlers and DTOs per resource, plus middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use common::ApiError;
pub use router::{create_api_router, ApiDoc, ApiState};
