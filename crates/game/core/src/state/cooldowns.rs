//! Per-move cooldown slots.

use core::num::NonZeroU32;

use arrayvec::ArrayVec;

use crate::catalog::MoveIndex;
use crate::config::GameConfig;

/// One optional remaining-turn counter per move of an archetype.
///
/// An empty slot means the move is available. Occupied slots always hold at
/// least one turn; a slot at one is cleared by the next [`Cooldowns::tick`]
/// instead of reaching zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldowns {
    slots: ArrayVec<Option<NonZeroU32>, { GameConfig::MAX_MOVES }>,
}

impl Cooldowns {
    /// Creates empty slots for `move_count` moves (capped at `MAX_MOVES`).
    pub fn new(move_count: usize) -> Self {
        Self {
            slots: (0..move_count.min(GameConfig::MAX_MOVES))
                .map(|_| None)
                .collect(),
        }
    }

    /// Number of slots (one per move).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Remaining turns for a move, or `None` if it is available.
    pub fn remaining(&self, index: MoveIndex) -> Option<NonZeroU32> {
        self.slots.get(index.get()).copied().flatten()
    }

    /// Returns true if the move exists and is not cooling down.
    pub fn is_ready(&self, index: MoveIndex) -> bool {
        matches!(self.slots.get(index.get()), Some(None))
    }

    /// Moves currently cooling down, in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, NonZeroU32)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|turns| (MoveIndex(index), turns)))
    }

    /// Number of moves cooling down.
    pub fn active(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Advance every slot by one round: one becomes empty, larger counts drop by one.
    pub fn tick(&mut self) {
        for slot in &mut self.slots {
            *slot = slot.and_then(|turns| NonZeroU32::new(turns.get() - 1));
        }
    }

    /// Put a move on cooldown, overwriting any previous count.
    ///
    /// A zero-turn cooldown leaves the slot untouched.
    pub fn start(&mut self, index: MoveIndex, turns: u32) {
        if let (Some(slot), Some(turns)) = (self.slots.get_mut(index.get()), NonZeroU32::new(turns))
        {
            *slot = Some(turns);
        }
    }
}
