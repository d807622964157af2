//! Shared data structures and constants.
//!
//! Everything in here is plain data with no dependencies, so it can be used by
//! the engine, the input mapper and the terminal host alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default host loop interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity at level 0 |
//! | `DROP_STEP_MS` | 100 | Gravity speed-up per level |
//! | `MIN_DROP_MS` | 100 | Gravity floor |
//! | `SOFT_DROP_MS` | 50 | Gravity while soft drop is held |
//!
//! # Drop Intervals by Level
//!
//! `max(MIN_DROP_MS, BASE_DROP_MS - level * DROP_STEP_MS)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 900ms |
//! | 5 | 500ms |
//! | 9+ | 100ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default host loop interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 0 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval reduction per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity floor so high levels stay playable
pub const MIN_DROP_MS: u32 = 100;

/// Fixed gravity interval while soft drop is held
pub const SOFT_DROP_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table.
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal nudges tried, in order, when a rotation collides.
pub const KICK_OFFSETS: [i8; 4] = [1, -1, 2, -2];

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece kinds
///
/// Each kind has one canonical shape and a fixed display color:
/// - **I**: Cyan, 1x4 bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display color of this kind.
    pub fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x06, 0xb6, 0xd4),
            PieceKind::O => Rgb::new(0xea, 0xb3, 0x08),
            PieceKind::T => Rgb::new(0xa8, 0x55, 0xf7),
            PieceKind::S => Rgb::new(0x22, 0xc5, 0x5e),
            PieceKind::Z => Rgb::new(0xef, 0x44, 0x44),
            PieceKind::J => Rgb::new(0x3b, 0x82, 0xf6),
            PieceKind::L => Rgb::new(0xf9, 0x73, 0x16),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked by a piece of that kind
pub type Cell = Option<PieceKind>;

/// Game session phase.
///
/// `Menu -> Playing <-> Paused`, `Paused -> Playing` (restart),
/// `Playing -> GameOver -> Menu | Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "gameover",
        }
    }
}

/// Discrete operation requests accepted by the engine.
///
/// Actions carry no payload. Which ones are accepted depends on the current
/// [`Phase`]; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Begin a fresh session (from the menu, while paused, or after game over)
    Start,
    /// Shift piece one column left
    MoveLeft,
    /// Shift piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise, with horizontal kicks
    Rotate,
    /// Soft drop key went down
    SoftDropPress,
    /// Soft drop key came up
    SoftDropRelease,
    /// Drop to the landing row and lock immediately
    HardDrop,
    /// Toggle between playing and paused
    Pause,
    /// Leave the game-over screen for the menu
    Menu,
}

impl GameAction {
    /// camelCase name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDropPress => "softDropPress",
            GameAction::SoftDropRelease => "softDropRelease",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Menu => "menu",
        }
    }
}

/// Engine-side event queued for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// A piece was written into the board.
    Locked { lines_cleared: u32, points: u32 },
    /// The next piece could not spawn; the session is over.
    GameOver {
        score: u32,
        high_score: u32,
        /// True when `score` beat the high score the session started with.
        new_record: bool,
    },
}
