//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is free of terminal, clock and file I/O. The host owns
//! time and input; the core owns the rules:
//!
//! - **Deterministic**: the same seed and the same action/time sequence
//!   produce the same game
//! - **Value-style helpers**: collision, rotation and line clearing take a
//!   board and a piece and return new values
//! - **Single mutator**: [`GameState`] is the only thing that changes a
//!   session
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells
//! - [`piece`]: the seven shapes, clockwise rotation, spawn placement
//! - [`spawner`]: seeded uniform piece selection
//! - [`collision`]: legality checks, drop distance, ghost
//! - [`rotation`]: rotation with horizontal wall kicks
//! - [`scoring`]: line clearing, classic line scores, level progression
//! - [`timing`]: gravity intervals and the drop timer
//! - [`game_state`]: phases, actions, lock/spawn cycle, events
//! - [`snapshot`]: fixed-size render view
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345, 0);
//! assert_eq!(game.phase(), Phase::Menu);
//!
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with the elapsed
//! milliseconds since the previous call. Gravity starts at 1000ms per row,
//! shortens by 100ms per level down to 100ms, and is 50ms while soft drop is
//! held.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod rotation;
pub mod scoring;
pub mod snapshot;
pub mod spawner;
pub mod timing;

pub use blockfall_types as types;

pub use board::Board;
pub use collision::{can_move, drop_distance, ghost, is_legal};
pub use game_state::GameState;
pub use piece::{Piece, Shape};
pub use rotation::try_rotate;
pub use scoring::{clear_lines, level_for, score_for};
pub use snapshot::{GameSnapshot, NextSnapshot, PieceSnapshot};
pub use spawner::PieceSpawner;
pub use timing::{drop_interval_ms, DropTimer};
