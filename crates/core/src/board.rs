//! Board module - the locked-cell grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds the kind
//! of the piece that locked there. Storage is a flat row-major array so copies
//! are cheap and nothing allocates.
//!
//! Coordinates are `(col, row)`: col 0..9 left to right, row 0..19 top to
//! bottom. Rows above the top (`row < 0`) are legal space for a piece that is
//! still falling in; they are never stored.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Row-major cells (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if !Self::in_bounds(col, row) {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    #[inline(always)]
    fn in_bounds(col: i8, row: i8) -> bool {
        col >= 0 && (col as usize) < WIDTH && row >= 0 && (row as usize) < HEIGHT
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Whether `(col, row)` addresses a stored cell.
    pub fn is_inside(&self, col: i8, row: i8) -> bool {
        Self::in_bounds(col, row)
    }

    /// Whether `(col, row)` blocks a piece.
    ///
    /// Space above the top is open as long as the column is on the board.
    /// The side walls and the floor count as occupied.
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        if col < 0 || col as usize >= WIDTH || row as isize >= HEIGHT as isize {
            return true;
        }
        if row < 0 {
            return false;
        }
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Get cell at `(col, row)`, `None` if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at `(col, row)`. Returns false if out of bounds.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Return a copy of this board with `cells` filled with `kind`.
    ///
    /// Cells outside the stored area (above the top while a piece was still
    /// entering) are dropped.
    pub fn with_cells_set<I>(&self, cells: I, kind: PieceKind) -> Board
    where
        I: IntoIterator<Item = (i8, i8)>,
    {
        let mut next = self.clone();
        for (col, row) in cells {
            next.set(col, row, Some(kind));
        }
        next
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|c| c.is_some())
    }

    /// Remove every full row and compact the rest downwards.
    ///
    /// Partial rows keep their contents and relative order; the freed rows at
    /// the top come back empty. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut write_row = HEIGHT;

        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, write_row * WIDTH);
                }
            }
        }

        self.cells[..write_row * WIDTH].fill(None);
        cleared
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy cells into a 2D grid (row-major).
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` is empty; any of `IOTSZJL` fills the cell with that kind, `#` fills
    /// with `I`. Missing rows at the top are empty, so callers can describe
    /// just the bottom of the well.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(HEIGHT).enumerate() {
            for (col, ch) in line.chars().take(WIDTH).enumerate() {
                let cell = match ch {
                    '#' => Some(PieceKind::I),
                    c => PieceKind::from_str(&c.to_string()),
                };
                board.set(col as i8, (offset + i) as i8, cell);
            }
        }
        board
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
