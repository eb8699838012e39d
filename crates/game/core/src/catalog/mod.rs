//! Move catalog: archetypes, their moves, and the keyed catalog of archetypes.
//!
//! Catalog data is immutable once built. Archetypes are shared through `Arc`
//! so every actor created from the same template reads the same definition.

pub mod archetype;
pub mod moves;

use std::collections::BTreeMap;
use std::sync::Arc;

pub use archetype::ActorArchetype;
pub use moves::{MoveDefinition, MoveIndex};

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while validating archetypes or assembling a catalog.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ArchetypeError {
    #[error("archetype '{archetype}' defines no moves")]
    NoMoves { archetype: String },

    #[error("archetype '{archetype}' defines {count} moves (maximum {max})")]
    TooManyMoves {
        archetype: String,
        count: usize,
        max: usize,
    },

    #[error("archetype '{archetype}' has invalid max health {value}")]
    InvalidMaxHealth { archetype: String, value: f64 },

    #[error("move '{move_name}' of archetype '{archetype}' has invalid damage {value}")]
    InvalidDamage {
        archetype: String,
        move_name: String,
        value: f64,
    },

    #[error("move '{move_name}' of archetype '{archetype}' has armor {percent}% (maximum 100%)")]
    ArmorOutOfRange {
        archetype: String,
        move_name: String,
        percent: u8,
    },

    #[error("archetype '{archetype}' has no move without a cooldown")]
    NoReusableMove { archetype: String },

    #[error("archetype id '{id}' is already registered")]
    DuplicateId { id: String },
}

impl GameError for ArchetypeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoMoves { .. } => "ARCHETYPE_NO_MOVES",
            Self::TooManyMoves { .. } => "ARCHETYPE_TOO_MANY_MOVES",
            Self::InvalidMaxHealth { .. } => "ARCHETYPE_INVALID_MAX_HEALTH",
            Self::InvalidDamage { .. } => "ARCHETYPE_INVALID_DAMAGE",
            Self::ArmorOutOfRange { .. } => "ARCHETYPE_ARMOR_OUT_OF_RANGE",
            Self::NoReusableMove { .. } => "ARCHETYPE_NO_REUSABLE_MOVE",
            Self::DuplicateId { .. } => "ARCHETYPE_DUPLICATE_ID",
        }
    }
}

/// Read-only collection of archetypes keyed by id (`"player"`, `"monster"`, ...).
#[derive(Clone, Debug, Default)]
pub struct ArchetypeCatalog {
    entries: BTreeMap<String, Arc<ActorArchetype>>,
}

impl ArchetypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register an archetype under `id`.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        archetype: ActorArchetype,
    ) -> Result<(), ArchetypeError> {
        let id = id.into();
        archetype.validate()?;
        if self.entries.contains_key(&id) {
            return Err(ArchetypeError::DuplicateId { id });
        }
        self.entries.insert(id, Arc::new(archetype));
        Ok(())
    }

    /// Shared handle to the archetype registered under `id`.
    pub fn get(&self, id: &str) -> Option<Arc<ActorArchetype>> {
        self.entries.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ActorArchetype>)> {
        self.entries.iter().map(|(id, archetype)| (id.as_str(), archetype))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
