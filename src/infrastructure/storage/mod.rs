//! User directory implementations

mod sample;

pub use sample::{SampleUserDirectory, ADDRESSABLE_USER_ID, CREATED_USER_ID};
