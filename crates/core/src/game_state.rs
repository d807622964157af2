//! Game state module - the session and its phase machine
//!
//! This module ties the board, pieces, spawner, timer and scoring together.
//! It is the only mutator of session state: the host feeds it discrete
//! [`GameAction`]s and elapsed time, then reads back a [`GameSnapshot`] and
//! drains [`CoreEvent`]s.
//!
//! Phase transitions:
//!
//! | Phase | Accepted actions |
//! |-------|------------------|
//! | Menu | `Start` |
//! | Playing | `MoveLeft`, `MoveRight`, `Rotate`, `SoftDropPress`, `SoftDropRelease`, `HardDrop`, `Pause` |
//! | Paused | `Start`, `Pause`, `SoftDropRelease` |
//! | GameOver | `Start`, `Menu` |
//!
//! Anything else is ignored and reported as "no change".

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::collision::{can_move, ghost, is_legal};
use crate::piece::Piece;
use crate::rotation::try_rotate;
use crate::scoring::{clear_lines, level_for, score_for};
use crate::snapshot::{GameSnapshot, NextSnapshot, PieceSnapshot};
use crate::spawner::PieceSpawner;
use crate::timing::DropTimer;
use crate::types::{CoreEvent, GameAction, Phase, PieceKind};

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Piece,
    spawner: PieceSpawner,
    timer: DropTimer,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    high_score: u32,
    /// Best score when the current session started; decides `new_record`.
    record_to_beat: u32,
    /// Set when the last session ended above `record_to_beat`.
    new_record: bool,
    /// Increments on every `Start`.
    session_id: u32,
    pieces_locked: u32,
    events: Vec<CoreEvent>,
}

impl GameState {
    /// Create a game sitting in the menu.
    ///
    /// `high_score` is the best score loaded from the host's store.
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self::with_spawner(PieceSpawner::new(seed), high_score)
    }

    pub fn with_spawner(mut spawner: PieceSpawner, high_score: u32) -> Self {
        let next = spawner.spawn();
        Self {
            board: Board::new(),
            active: None,
            next,
            spawner,
            timer: DropTimer::new(),
            phase: Phase::Menu,
            score: 0,
            lines: 0,
            level: 0,
            high_score,
            record_to_beat: high_score,
            new_record: false,
            session_id: 0,
            pieces_locked: 0,
            events: Vec::with_capacity(4),
        }
    }

    /// Start a session from a prepared position.
    ///
    /// Useful for puzzles and tests: `board` and `active` are taken as-is,
    /// `next` becomes the preview. The phase is `Playing` unless `active`
    /// is already illegal, in which case the session ends immediately.
    pub fn from_position(
        seed: u64,
        high_score: u32,
        board: Board,
        active: Piece,
        next: PieceKind,
    ) -> Self {
        let mut state = Self::new(seed, high_score);
        state.board = board;
        state.next = Piece::spawn(next);
        state.session_id = 1;
        state.phase = Phase::Playing;
        if is_legal(&state.board, &active) {
            state.active = Some(active);
        } else {
            state.game_over();
        }
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// The previewed piece, positioned where it will spawn
    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// True once a session has ended with a score above the previous best.
    pub fn new_record(&self) -> bool {
        self.new_record
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn soft_drop(&self) -> bool {
        self.timer.soft_drop()
    }

    /// Current gravity interval, soft drop included
    pub fn drop_interval_ms(&self) -> u32 {
        self.timer.interval_ms(self.level)
    }

    /// Where the active piece would land
    pub fn ghost(&self) -> Option<Piece> {
        self.active.map(|piece| ghost(&self.board, &piece))
    }

    /// Take all events queued since the last call.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CoreEvent> {
        self.events.drain(..)
    }

    /// Apply one action. Returns true when the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let changed = match (self.phase, action) {
            (Phase::Menu | Phase::Paused | Phase::GameOver, GameAction::Start) => {
                self.start_session();
                true
            }
            (Phase::GameOver, GameAction::Menu) => {
                self.phase = Phase::Menu;
                true
            }
            (Phase::Playing, GameAction::MoveLeft) => self.try_shift(-1),
            (Phase::Playing, GameAction::MoveRight) => self.try_shift(1),
            (Phase::Playing, GameAction::Rotate) => self.try_rotate(),
            (Phase::Playing, GameAction::SoftDropPress) => self.set_soft_drop(true),
            (Phase::Playing | Phase::Paused, GameAction::SoftDropRelease) => {
                self.set_soft_drop(false)
            }
            (Phase::Playing, GameAction::HardDrop) => self.hard_drop(),
            (Phase::Playing, GameAction::Pause) => {
                self.phase = Phase::Paused;
                self.timer.set_soft_drop(false);
                debug!(session = self.session_id, phase = self.phase.as_str(), "paused");
                true
            }
            (Phase::Paused, GameAction::Pause) => {
                self.phase = Phase::Playing;
                debug!(session = self.session_id, phase = self.phase.as_str(), "resumed");
                true
            }
            _ => false,
        };
        if !changed {
            trace!(
                action = action.as_str(),
                phase = self.phase.as_str(),
                "action ignored"
            );
        }
        changed
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Does nothing outside `Playing`. Performs at most one transition: a
    /// one-row descent, or a lock/clear/spawn cycle when the piece cannot
    /// descend. Returns true when either happened.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing || self.active.is_none() {
            return false;
        }
        if !self.timer.advance(elapsed_ms, self.level) {
            return false;
        }
        self.descend_or_lock();
        true
    }

    /// Apply queued actions in arrival order, then advance time once.
    pub fn step<I>(&mut self, elapsed_ms: u32, actions: I) -> bool
    where
        I: IntoIterator<Item = GameAction>,
    {
        let mut changed = false;
        for action in actions {
            changed |= self.apply_action(action);
        }
        changed | self.tick(elapsed_ms)
    }

    /// Copy the render view into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(PieceSnapshot::from);
        out.ghost = self.ghost().map(PieceSnapshot::from);
        out.next = Some(NextSnapshot {
            kind: self.next.kind,
            shape: self.next.shape,
        });
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.high_score = self.high_score;
        out.drop_interval_ms = self.drop_interval_ms();
        out.session_id = self.session_id;
        out.new_record = self.new_record;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Drop everything from the previous session and begin playing.
    ///
    /// The spawner stream and the preview carry over, so the piece shown in
    /// the menu is the first one played.
    fn start_session(&mut self) {
        self.board.clear();
        self.active = None;
        self.timer.reset();
        self.score = 0;
        self.lines = 0;
        self.level = 0;
        self.pieces_locked = 0;
        self.record_to_beat = self.high_score;
        self.new_record = false;
        self.session_id = self.session_id.wrapping_add(1);
        self.phase = Phase::Playing;
        self.promote_next();

        info!(
            session = self.session_id,
            seed = self.spawner.seed(),
            high_score = self.high_score,
            "session started"
        );
    }

    fn try_shift(&mut self, dc: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if !can_move(&self.board, &active, dc, 0) {
            return false;
        }
        self.active = Some(active.shifted(dc, 0));
        true
    }

    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        match try_rotate(&self.board, &active) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    fn set_soft_drop(&mut self, held: bool) -> bool {
        if self.timer.soft_drop() == held {
            return false;
        }
        self.timer.set_soft_drop(held);
        true
    }

    /// Fall to the landing row and lock without waiting for the timer.
    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.lock(ghost(&self.board, &active));
        true
    }

    fn descend_or_lock(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        if can_move(&self.board, &active, 0, 1) {
            self.active = Some(active.shifted(0, 1));
        } else {
            self.lock(active);
        }
    }

    /// Write `piece` into the board, clear rows, score, and spawn the next piece.
    fn lock(&mut self, piece: Piece) {
        let locked = self.board.with_cells_set(piece.cells(), piece.kind);
        let (board, cleared) = clear_lines(&locked);
        let points = score_for(cleared, self.level);

        self.board = board;
        self.active = None;
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        self.level = level_for(self.lines);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        debug!(
            kind = piece.kind.as_str(),
            col = piece.col,
            row = piece.row,
            cleared,
            points,
            level = self.level,
            "piece locked"
        );
        self.events.push(CoreEvent::Locked {
            lines_cleared: cleared,
            points,
        });

        self.promote_next();
    }

    /// Make the preview the active piece and draw a new preview. Ends the
    /// session when the promoted piece does not fit.
    fn promote_next(&mut self) {
        let piece = self.next;
        self.next = self.spawner.spawn();
        self.timer.restart();

        if is_legal(&self.board, &piece) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        let new_record = self.score > self.record_to_beat;
        self.new_record = new_record;
        self.high_score = self.high_score.max(self.score);
        self.phase = Phase::GameOver;
        self.timer.reset();

        info!(
            session = self.session_id,
            score = self.score,
            lines = self.lines,
            level = self.level,
            high_score = self.high_score,
            new_record,
            "game over"
        );
        self.events.push(CoreEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
            new_record,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
