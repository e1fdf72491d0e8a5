//! RNG module - batch piece generation
//!
//! Every batch slot independently draws a shape uniformly from the 8-shape
//! palette and a color uniformly from the 4-color palette. There is no bag and no
//! rarity weighting.
//!
//! Randomness comes from a seeded LCG so that a run replays exactly from its seed.

use crate::pieces::Piece;
use crate::types::{BlockColor, ShapeKind, BATCH_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max). `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of an LCG are weak; take the high half.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Pick a uniformly random index into a slice of length `len`.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_range(len as u32) as usize)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Produces batches of [`BATCH_SIZE`] random pieces
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
}

impl PieceGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one piece: uniform shape, uniform color, unused.
    pub fn next_piece(&mut self) -> Piece {
        let shape = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color = BlockColor::ALL[self.rng.next_range(BlockColor::ALL.len() as u32) as usize];
        Piece::new(shape, color)
    }

    /// Draw a full batch
    pub fn generate_batch(&mut self) -> [Piece; BATCH_SIZE] {
        std::array::from_fn(|_| self.next_piece())
    }

    /// Shared RNG (question draws and shuffles use the same stream)
    pub fn rng_mut(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    /// Current RNG state (a generator built from it continues the same sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
