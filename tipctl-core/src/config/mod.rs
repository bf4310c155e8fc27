//! Configuration types
//!
//! The user configuration is a small fixed-size record stored in flash as
//! postcard-serialized binary data.

#[cfg(feature = "serde")]
pub mod codec;
pub mod store;
pub mod types;

pub use store::{commit, load_or_reset, ConfigSource};
pub use types::*;
