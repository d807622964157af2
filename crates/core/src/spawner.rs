//! Spawner module - random piece selection
//!
//! Every draw picks one of the seven kinds uniformly and independently of the
//! previous draws. There is no 7-bag: runs of the same kind and long droughts
//! are both possible.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::piece::Piece;
use crate::types::PieceKind;

/// Independent uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceSpawner {
    rng: StdRng,
    seed: u64,
}

impl PieceSpawner {
    /// Create a spawner with a fixed seed; the same seed yields the same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a spawner seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Draw the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }

    /// Draw a kind and place it at the spawn position
    pub fn spawn(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }

    /// Seed this spawner was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
