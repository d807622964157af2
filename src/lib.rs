//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine and host crates under one name and adds the pieces
//! that touch the environment: configuration and high-score storage.

pub mod config;
pub mod store;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::Config;
pub use store::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore, StoreError};
