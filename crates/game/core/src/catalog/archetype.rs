//! Actor archetypes: immutable templates an actor is built from.

use super::{ArchetypeError, MoveDefinition, MoveIndex};
use crate::config::GameConfig;

/// Immutable template defining an actor's maximum health and move list.
///
/// # Invariants
///
/// Enforced by [`ActorArchetype::validate`], which every constructor and
/// content loader runs:
///
/// - `1..=GameConfig::MAX_MOVES` moves
/// - finite, positive `max_health`
/// - finite, non-negative damage and armor percentages of at most 100
/// - at least one move with `cooldown_turns == 0`, so an actor always has a
///   legal move
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ArchetypeData"))]
pub struct ActorArchetype {
    display_name: String,
    max_health: f64,
    moves: Vec<MoveDefinition>,
}

/// Unvalidated archetype fields as they appear in content files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ArchetypeData {
    display_name: String,
    max_health: f64,
    moves: Vec<MoveDefinition>,
}

#[cfg(feature = "serde")]
impl TryFrom<ArchetypeData> for ActorArchetype {
    type Error = ArchetypeError;

    fn try_from(data: ArchetypeData) -> Result<Self, Self::Error> {
        Self::new(data.display_name, data.max_health, data.moves)
    }
}

impl ActorArchetype {
    /// Build and validate an archetype.
    pub fn new(
        display_name: impl Into<String>,
        max_health: f64,
        moves: Vec<MoveDefinition>,
    ) -> Result<Self, ArchetypeError> {
        let archetype = Self {
            display_name: display_name.into(),
            max_health,
            moves,
        };
        archetype.validate()?;
        Ok(archetype)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn moves(&self) -> &[MoveDefinition] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Look up a move by index.
    pub fn get(&self, index: MoveIndex) -> Option<&MoveDefinition> {
        self.moves.get(index.get())
    }

    /// Iterate moves together with their indices, in catalog order.
    pub fn indexed_moves(&self) -> impl Iterator<Item = (MoveIndex, &MoveDefinition)> {
        self.moves
            .iter()
            .enumerate()
            .map(|(index, definition)| (MoveIndex(index), definition))
    }

    /// Check every archetype invariant.
    pub fn validate(&self) -> Result<(), ArchetypeError> {
        let archetype = || self.display_name.clone();

        if self.moves.is_empty() {
            return Err(ArchetypeError::NoMoves {
                archetype: archetype(),
            });
        }
        if self.moves.len() > GameConfig::MAX_MOVES {
            return Err(ArchetypeError::TooManyMoves {
                archetype: archetype(),
                count: self.moves.len(),
                max: GameConfig::MAX_MOVES,
            });
        }
        if !self.max_health.is_finite() || self.max_health <= 0.0 {
            return Err(ArchetypeError::InvalidMaxHealth {
                archetype: archetype(),
                value: self.max_health,
            });
        }

        for definition in &self.moves {
            for value in [definition.physical_damage, definition.magic_damage] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ArchetypeError::InvalidDamage {
                        archetype: archetype(),
                        move_name: definition.name.clone(),
                        value,
                    });
                }
            }
            for percent in [
                definition.physical_armor_percent,
                definition.magic_armor_percent,
            ] {
                if percent > MoveDefinition::MAX_ARMOR_PERCENT {
                    return Err(ArchetypeError::ArmorOutOfRange {
                        archetype: archetype(),
                        move_name: definition.name.clone(),
                        percent,
                    });
                }
            }
        }

        if !self.moves.iter().any(MoveDefinition::is_reusable) {
            return Err(ArchetypeError::NoReusableMove {
                archetype: archetype(),
            });
        }

        Ok(())
    }
}
