//! Read-only view of a session for renderers.
//!
//! `GameSnapshot` is `Copy` and fixed-size so a host can keep one around and
//! refresh it every frame with [`GameState::snapshot_into`] without
//! allocating.
//!
//! [`GameState::snapshot_into`]: crate::GameState::snapshot_into

use crate::piece::{Piece, Shape};
use crate::types::{Cell, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// A piece reduced to its kind and absolute cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
}

impl From<Piece> for PieceSnapshot {
    fn from(piece: Piece) -> Self {
        let mut cells = [(0i8, 0i8); 4];
        for (dst, src) in cells.iter_mut().zip(piece.cells()) {
            *dst = src;
        }
        Self {
            kind: piece.kind,
            cells,
        }
    }
}

impl PieceSnapshot {
    /// Cells that fall inside the visible board.
    pub fn visible_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.cells.iter().filter_map(|&(col, row)| {
            let visible = col >= 0
                && col < BOARD_WIDTH as i8
                && row >= 0
                && row < BOARD_HEIGHT as i8;
            visible.then_some((col as u8, row as u8))
        })
    }
}

/// The preview piece: kind plus its spawn-orientation shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    pub next: Option<NextSnapshot>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub high_score: u32,
    pub drop_interval_ms: u32,
    pub session_id: u32,
    /// The last finished session beat the previous best.
    pub new_record: bool,
}

impl GameSnapshot {
    /// Whether gameplay input will be accepted.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: None,
            next: None,
            phase: Phase::Menu,
            score: 0,
            level: 0,
            lines: 0,
            high_score: 0,
            drop_interval_ms: 0,
            session_id: 0,
            new_record: false,
        }
    }
}
