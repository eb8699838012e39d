//! Abstraction for sourcing player and monster move choices.
//!
//! Runtime users plug in [`MoveSelector`] implementations so a duel can run
//! with human input, scripted fixtures, or random policies.
use arena_core::{ActorState, MoveIndex};

use super::errors::{Result, RuntimeError, Side};

/// Everything a selector may look at when picking a move.
#[derive(Debug, Clone, Copy)]
pub struct SelectionView<'a> {
    /// Side the selector is choosing for.
    pub side: Side,
    /// The actor that will use the move.
    pub actor: &'a ActorState,
    /// The actor on the other side.
    pub opponent: &'a ActorState,
    /// Legal choices in ascending catalog order; never empty.
    pub available: &'a [MoveIndex],
    /// Move the opponent already committed to this round, if it chose first.
    pub opponent_choice: Option<MoveIndex>,
}

/// Trait for choosing a move for one side of a duel.
///
/// Different implementations can handle:
/// - Player input (from UI/CLI)
/// - Monster policies
/// - Scripted/replayed moves
/// - Testing fixtures
///
/// The returned index is validated by the runtime; an index outside
/// `view.available` fails the round before anything is resolved.
pub trait MoveSelector {
    fn select(&mut self, view: &SelectionView<'_>) -> Result<MoveIndex>;
}

impl<S: MoveSelector + ?Sized> MoveSelector for &mut S {
    fn select(&mut self, view: &SelectionView<'_>) -> Result<MoveIndex> {
        (**self).select(view)
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select(&mut self, view: &SelectionView<'_>) -> Result<MoveIndex> {
        (**self).select(view)
    }
}

/// A simple selector that always picks the lowest available move.
/// Useful for testing or as a fallback.
pub struct FirstAvailableSelector;

impl MoveSelector for FirstAvailableSelector {
    fn select(&mut self, view: &SelectionView<'_>) -> Result<MoveIndex> {
        view.available
            .first()
            .copied()
            .ok_or(RuntimeError::NoAvailableMoves { side: view.side })
    }
}
