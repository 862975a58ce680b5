pub mod user;

pub use user::{User, UserDirectory, UserPatch};
