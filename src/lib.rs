//! # Sample Users REST API
//!
//! Template REST service exposing CRUD endpoints over a single "user"
//! resource backed by hardcoded sample data.
//!
//! ## Architecture
//!
//! - **domain**: the `User` entity and the `UserDirectory` interface
//! - **infrastructure**: the hardcoded sample directory
//! - **interfaces**: REST API (axum) with Swagger documentation
//! - **shared**: graceful shutdown signalling
//! - **server**: runtime that wires configuration, tracing and the API

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiState};
