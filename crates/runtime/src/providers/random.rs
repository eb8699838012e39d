//! Uniform random move selection.

use arena_core::MoveIndex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::api::{MoveSelector, Result, RuntimeError, SelectionView};

/// Picks uniformly among the available moves.
///
/// This is the monster's policy; it also serves as an auto-player.
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Selector seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible selector for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select(&mut self, view: &SelectionView<'_>) -> Result<MoveIndex> {
        view.available
            .choose(&mut self.rng)
            .copied()
            .ok_or(RuntimeError::NoAvailableMoves { side: view.side })
    }
}
