//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and filters
//! press/repeat/release kinds so held keys behave the same on terminals with
//! and without key-release reporting.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{InputHandler, KEY_RELEASE_TIMEOUT_MS};
pub use map::{map_key, should_quit};
