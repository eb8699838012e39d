//! Combat resolution system.
//!
//! Pure functions resolving one simultaneous exchange of moves between two
//! actors, plus outcome classification once the exchange is over.
//!
//! # Core Functions
//!
//! - `mitigated`: percentage reduction of one damage component
//! - `calculate_damage`: attacker's chosen move against defender's chosen move
//! - `resolve_round`: apply both damages, age cooldowns, reset choices
//! - `outcome` / `final_outcome`: draw, win, or (fatally) neither

pub mod damage;
pub mod error;
pub mod outcome;
pub mod round;

pub use damage::{DamageBreakdown, calculate_breakdown, calculate_damage, mitigated};
pub use error::CombatError;
pub use outcome::{GameOutcome, final_outcome, is_dead, outcome};
pub use round::{Exchange, RoundReport, resolve_round};
