//! Move selector implementations for different combatant behaviors.

pub mod random;
pub mod scripted;

pub use random::RandomSelector;
pub use scripted::ScriptedSelector;
