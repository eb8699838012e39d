//! Replays a fixed sequence of moves.

use std::collections::VecDeque;

use arena_core::MoveIndex;

use crate::api::{MoveSelector, Result, RuntimeError, SelectionView};

/// Returns pre-recorded moves in order, one per round.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    script: VecDeque<MoveIndex>,
}

impl ScriptedSelector {
    pub fn new(script: impl IntoIterator<Item = MoveIndex>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Convenience constructor from raw indices.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::new(indices.into_iter().map(MoveIndex))
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoveSelector for ScriptedSelector {
    fn select(&mut self, view: &SelectionView<'_>) -> Result<MoveIndex> {
        self.script
            .pop_front()
            .ok_or(RuntimeError::ScriptExhausted { side: view.side })
    }
}
