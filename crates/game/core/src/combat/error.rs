//! Errors raised by move selection and round resolution.

use crate::catalog::MoveIndex;
use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CombatError {
    /// Damage or round resolution was requested before both moves were chosen.
    #[error("moves not chosen (first missing: {first}, second missing: {second})")]
    MovesNotChosen { first: bool, second: bool },

    #[error("move {index} does not exist (archetype has {move_count} moves)")]
    UnknownMove { index: MoveIndex, move_count: usize },

    #[error("move {index} is on cooldown for {remaining} more round(s)")]
    MoveOnCooldown { index: MoveIndex, remaining: u32 },

    /// The turn loop stopped although neither actor is dead.
    #[error("impossible game state: both actors alive ({first_health} / {second_health})")]
    ImpossibleGameState {
        first_health: f64,
        second_health: f64,
    },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MovesNotChosen { .. } => ErrorSeverity::Internal,
            Self::UnknownMove { .. } | Self::MoveOnCooldown { .. } => ErrorSeverity::Validation,
            Self::ImpossibleGameState { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MovesNotChosen { .. } => "COMBAT_MOVES_NOT_CHOSEN",
            Self::UnknownMove { .. } => "COMBAT_UNKNOWN_MOVE",
            Self::MoveOnCooldown { .. } => "COMBAT_MOVE_ON_COOLDOWN",
            Self::ImpossibleGameState { .. } => "COMBAT_IMPOSSIBLE_GAME_STATE",
        }
    }
}
