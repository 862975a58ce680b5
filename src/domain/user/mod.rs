//! User aggregate
//!
//! Contains the User entity, the partial-update DTO, and the directory
//! interface handlers read from.

pub mod model;
pub mod repository;

pub use model::{User, UserPatch};
pub use repository::UserDirectory;
