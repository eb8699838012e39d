//! Mutable per-combatant state.
//!
//! An [`ActorState`] is created at game start from a shared archetype and is
//! owned by the turn loop for the whole duel. Move choices go through
//! [`ActorState::choose_move`], which enforces that only available moves can
//! be chosen; health and cooldown changes happen only inside
//! [`crate::combat::resolve_round`].

pub mod cooldowns;

use std::sync::Arc;

pub use cooldowns::Cooldowns;

use crate::catalog::{ActorArchetype, MoveDefinition, MoveIndex};
use crate::combat::CombatError;

/// Runtime state of one combatant.
///
/// # Invariants
///
/// - `chosen_move`, when set, refers to a move that is not cooling down
/// - `cooldowns` has exactly one slot per archetype move
/// - `health` is never clamped; it may drop below zero
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    archetype: Arc<ActorArchetype>,
    health: f64,
    chosen_move: Option<MoveIndex>,
    cooldowns: Cooldowns,
}

impl ActorState {
    /// Create an actor at `max_health + health_delta` with every move available.
    ///
    /// `health_delta` may be negative (difficulty adjustment); the result is
    /// not clamped.
    pub fn new(archetype: Arc<ActorArchetype>, health_delta: f64) -> Self {
        let cooldowns = Cooldowns::new(archetype.move_count());
        Self {
            health: archetype.max_health() + health_delta,
            archetype,
            chosen_move: None,
            cooldowns,
        }
    }

    pub fn archetype(&self) -> &ActorArchetype {
        &self.archetype
    }

    /// Shared handle to the archetype, for building further actors.
    pub fn archetype_handle(&self) -> Arc<ActorArchetype> {
        Arc::clone(&self.archetype)
    }

    pub fn display_name(&self) -> &str {
        self.archetype.display_name()
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn chosen_move(&self) -> Option<MoveIndex> {
        self.chosen_move
    }

    /// Definition of the chosen move, if one is chosen.
    pub fn chosen_definition(&self) -> Option<&MoveDefinition> {
        self.chosen_move.and_then(|index| self.archetype.get(index))
    }

    pub fn cooldowns(&self) -> &Cooldowns {
        &self.cooldowns
    }

    /// Quick check if actor is alive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Returns true if `index` names a move that can be chosen this round.
    pub fn can_use(&self, index: MoveIndex) -> bool {
        index.get() < self.archetype.move_count() && self.cooldowns.is_ready(index)
    }

    /// Commit to a move for the current round.
    ///
    /// Only moves listed by [`available_moves`] are accepted. Choosing again
    /// before the round resolves replaces the previous choice.
    pub fn choose_move(&mut self, index: MoveIndex) -> Result<(), CombatError> {
        if let Some(remaining) = self.cooldowns.remaining(index) {
            return Err(CombatError::MoveOnCooldown {
                index,
                remaining: remaining.get(),
            });
        }
        if !self.can_use(index) {
            return Err(CombatError::UnknownMove {
                index,
                move_count: self.archetype.move_count().min(self.cooldowns.capacity()),
            });
        }
        self.chosen_move = Some(index);
        Ok(())
    }

    /// Drop the pending choice without resolving a round.
    pub fn clear_choice(&mut self) {
        self.chosen_move = None;
    }

    pub(crate) fn take_damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    /// Close the round for this actor: age existing cooldowns, start the
    /// cooldown of the move just used, and reset the choice.
    pub(crate) fn finish_round(&mut self, used: MoveIndex) {
        self.cooldowns.tick();
        if let Some(definition) = self.archetype.get(used) {
            self.cooldowns.start(used, definition.cooldown_turns);
        }
        self.chosen_move = None;
    }
}

/// Every move index of the actor's archetype that is not cooling down, in
/// ascending catalog order.
pub fn available_moves(actor: &ActorState) -> Vec<MoveIndex> {
    actor
        .archetype
        .indexed_moves()
        .map(|(index, _)| index)
        .filter(|&index| actor.cooldowns.is_ready(index))
        .collect()
}
