//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the combat rules and from move selectors so clients
//! can bubble them up with consistent context.
use std::fmt;

use arena_core::{CombatError, ErrorSeverity, GameError, GuessError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error("{side} has no available move")]
    NoAvailableMoves { side: Side },

    #[error("{side} move script exhausted")]
    ScriptExhausted { side: Side },

    #[error("{side} move selector failed: {message}")]
    Selector { side: Side, message: String },

    #[error("duel is already decided")]
    DuelOver,

    #[error("duel undecided after {rounds} rounds")]
    RoundLimitReached { rounds: u32 },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(err) => err.severity(),
            Self::Guess(err) => err.severity(),
            Self::NoAvailableMoves { .. } => ErrorSeverity::Fatal,
            Self::ScriptExhausted { .. } | Self::Selector { .. } | Self::DuelOver => {
                ErrorSeverity::Internal
            }
            Self::RoundLimitReached { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Combat(err) => err.error_code(),
            Self::Guess(err) => err.error_code(),
            Self::NoAvailableMoves { .. } => "RUNTIME_NO_AVAILABLE_MOVES",
            Self::ScriptExhausted { .. } => "RUNTIME_SCRIPT_EXHAUSTED",
            Self::Selector { .. } => "RUNTIME_SELECTOR_FAILED",
            Self::DuelOver => "RUNTIME_DUEL_OVER",
            Self::RoundLimitReached { .. } => "RUNTIME_ROUND_LIMIT_REACHED",
        }
    }
}

/// Which combatant a selector or error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Monster,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Side::Player => "player",
            Side::Monster => "monster",
        };
        write!(f, "{}", label)
    }
}
