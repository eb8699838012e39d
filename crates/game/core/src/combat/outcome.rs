//! Game-over classification.

use strum::Display;

use super::CombatError;
use crate::state::ActorState;

/// How a duel ended. The first actor is the player, the second the monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    /// Both actors died in the same round.
    Draw,
    PlayerWins,
    MonsterWins,
}

/// Returns true once the actor's health is at or below zero.
#[inline]
pub fn is_dead(actor: &ActorState) -> bool {
    actor.health() <= 0.0
}

/// Classify the duel, or `None` while both actors are alive.
pub fn outcome(player: &ActorState, monster: &ActorState) -> Option<GameOutcome> {
    match (is_dead(player), is_dead(monster)) {
        (true, true) => Some(GameOutcome::Draw),
        (true, false) => Some(GameOutcome::MonsterWins),
        (false, true) => Some(GameOutcome::PlayerWins),
        (false, false) => None,
    }
}

/// Classify a duel whose turn loop has already stopped.
///
/// # Errors
///
/// [`CombatError::ImpossibleGameState`] if neither actor is dead: the loop
/// must only stop on a death, so this signals a defect in the driver.
pub fn final_outcome(player: &ActorState, monster: &ActorState) -> Result<GameOutcome, CombatError> {
    outcome(player, monster).ok_or_else(|| CombatError::ImpossibleGameState {
        first_health: player.health(),
        second_health: monster.health(),
    })
}
