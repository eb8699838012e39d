//! Deterministic duel rules and data types shared across the arena crates.
//!
//! `arena-core` defines the canonical combat rules (move catalogs, actor state,
//! round resolution, outcome classification) plus the scoring rules of the
//! number-guessing game. Everything here is pure: no I/O, no logging, no
//! randomness. The runtime drives these APIs and the content crate feeds them
//! data.
pub mod catalog;
pub mod combat;
pub mod config;
pub mod error;
pub mod guess;
pub mod state;

pub use catalog::{ActorArchetype, ArchetypeCatalog, ArchetypeError, MoveDefinition, MoveIndex};
pub use combat::{
    CombatError, DamageBreakdown, Exchange, GameOutcome, RoundReport, calculate_breakdown,
    calculate_damage, final_outcome, is_dead, mitigated, outcome, resolve_round,
};
pub use config::{Difficulty, GameConfig};
pub use error::{ErrorSeverity, GameError};
pub use guess::{Feedback, GuessError, GuessResult, GuessSession, SecretNumber};
pub use state::{ActorState, Cooldowns, available_moves};
