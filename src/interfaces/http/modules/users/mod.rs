//! Users module — CRUD over the sample user directory

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
