//! Public runtime API surface.
//!
//! Re-exports the error type and the selector abstraction so downstream
//! crates can depend on a single module.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError, Side};
pub use providers::{FirstAvailableSelector, MoveSelector, SelectionView};
