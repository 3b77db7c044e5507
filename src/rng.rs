//! Uniform piece selection
//!
//! Every spawn draws independently and uniformly from the 7 kinds - no bag,
//! no drought protection. The generator is seedable so engine tests can
//! replay an exact piece sequence.

use crate::tetromino::TetrominoType;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The piece picker
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: ChaCha8Rng,
}

impl PieceRng {
    /// Create a picker with a fixed seed (deterministic sequences)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next piece kind
    pub fn next(&mut self) -> TetrominoType {
        let kinds = TetrominoType::all();
        kinds[self.rng.gen_range(0..kinds.len())]
    }
}
