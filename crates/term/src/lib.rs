//! Terminal host rendering.
//!
//! A snapshot is drawn into a [`FrameBuffer`] by [`GameView`] (pure, unit
//! tested) and flushed by [`TerminalRenderer`] (crossterm, raw mode). The
//! renderer only reads snapshots; it never touches game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
