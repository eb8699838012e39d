//! Built-in content shipped inside the binary.
//!
//! The default catalog is parsed once on first use and kept for the rest of
//! the process; it is never mutated or torn down.

use std::sync::OnceLock;

use arena_core::{ArchetypeCatalog, GameConfig};

use crate::loaders::{ArchetypeLoader, ConfigLoader, LoadResult};

/// RON source of the built-in archetypes.
pub const ARCHETYPES_RON: &str = include_str!("../data/archetypes.ron");

/// TOML source of the default game configuration.
pub const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// Archetype id of the built-in player character.
pub const PLAYER_ID: &str = "player";

/// Archetype id of the built-in monster.
pub const MONSTER_ID: &str = "monster";

static CATALOG: OnceLock<ArchetypeCatalog> = OnceLock::new();

/// Process-wide built-in archetype catalog.
pub fn catalog() -> LoadResult<&'static ArchetypeCatalog> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let parsed = ArchetypeLoader::parse(ARCHETYPES_RON)?;
    Ok(CATALOG.get_or_init(|| parsed))
}

/// Default game configuration.
pub fn config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(CONFIG_TOML)
}
