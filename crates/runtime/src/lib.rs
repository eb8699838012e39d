//! Runtime orchestration for arena duels.
//!
//! This crate drives the pure rules from `arena-core`: it asks pluggable
//! [`MoveSelector`]s for moves, resolves rounds until one side dies, and
//! reports the result. It also generates secrets for the guessing game and can
//! play a guessing session automatically.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error type and the selector abstraction
//! - [`providers`] ships the built-in selectors
//! - [`duel`] hosts the turn loop
//! - [`guess`] draws random secrets and auto-plays sessions
pub mod api;
pub mod duel;
pub mod guess;
pub mod providers;

pub use api::{FirstAvailableSelector, MoveSelector, Result, RuntimeError, SelectionView, Side};
pub use duel::{Duel, DuelSummary};
pub use guess::{auto_play, generate_secret, generate_secret_with_len, new_session};
pub use providers::{RandomSelector, ScriptedSelector};
