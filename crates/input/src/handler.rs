//! Press/repeat/release filtering for terminal key events.
//!
//! Terminals differ: some report key releases and auto-repeat kinds, most
//! only send a fresh `Press` for every auto-repeat. The handler turns either
//! stream into discrete game actions:
//!
//! - soft drop is a held state: the first press emits `SoftDropPress`, the
//!   release (real or timed out) emits `SoftDropRelease`
//! - hard drop fires once per physical press and never while held
//! - moves and rotation follow the terminal's auto-repeat

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::GameAction;

/// Without release events, a held key is considered released once no press
/// for it arrived within this window.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held keys for soft drop and the hard-drop latch.
#[derive(Debug, Clone)]
pub struct InputHandler {
    soft_drop_held: bool,
    hard_drop_latched: bool,
    last_soft_drop: Instant,
    last_hard_drop: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            soft_drop_held: false,
            hard_drop_latched: false,
            last_soft_drop: now,
            last_hard_drop: now,
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Translate one key event into at most one action.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<GameAction> {
        self.handle_key_event_at(key, Instant::now())
    }

    fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) -> Option<GameAction> {
        let action = map_key(key)?;
        match key.kind {
            KeyEventKind::Press => self.on_press(action, now),
            KeyEventKind::Repeat => self.on_repeat(action, now),
            KeyEventKind::Release => self.on_release(action),
        }
    }

    fn on_press(&mut self, action: GameAction, now: Instant) -> Option<GameAction> {
        match action {
            GameAction::SoftDropPress => {
                self.last_soft_drop = now;
                if self.soft_drop_held {
                    None
                } else {
                    self.soft_drop_held = true;
                    Some(action)
                }
            }
            GameAction::HardDrop => {
                self.last_hard_drop = now;
                if self.hard_drop_latched {
                    None
                } else {
                    self.hard_drop_latched = true;
                    Some(action)
                }
            }
            _ => Some(action),
        }
    }

    fn on_repeat(&mut self, action: GameAction, now: Instant) -> Option<GameAction> {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::Rotate => Some(action),
            GameAction::SoftDropPress => {
                self.last_soft_drop = now;
                None
            }
            GameAction::HardDrop => {
                self.last_hard_drop = now;
                None
            }
            _ => None,
        }
    }

    fn on_release(&mut self, action: GameAction) -> Option<GameAction> {
        match action {
            GameAction::SoftDropPress if self.soft_drop_held => {
                self.soft_drop_held = false;
                Some(GameAction::SoftDropRelease)
            }
            GameAction::HardDrop => {
                self.hard_drop_latched = false;
                None
            }
            _ => None,
        }
    }

    /// Release keys whose presses stopped arriving. Call once per frame.
    pub fn update(&mut self) -> Option<GameAction> {
        self.update_at(Instant::now())
    }

    fn update_at(&mut self, now: Instant) -> Option<GameAction> {
        let timeout = Duration::from_millis(u64::from(self.key_release_timeout_ms));

        if self.hard_drop_latched && now.saturating_duration_since(self.last_hard_drop) > timeout {
            self.hard_drop_latched = false;
        }

        if self.soft_drop_held && now.saturating_duration_since(self.last_soft_drop) > timeout {
            self.soft_drop_held = false;
            return Some(GameAction::SoftDropRelease);
        }
        None
    }

    pub fn reset(&mut self) {
        *self = Self::new().with_key_release_timeout_ms(self.key_release_timeout_ms);
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
