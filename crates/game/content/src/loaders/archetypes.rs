//! Archetype catalog loader.
//!
//! Loads actor archetypes (player and monsters alike) from RON files.

use std::path::Path;

use arena_core::{ActorArchetype, ArchetypeCatalog};

use crate::loaders::{LoadResult, read_file};

/// Loader for archetype catalogs from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load an archetype catalog from a RON file.
    ///
    /// RON format: `Vec<(String, ActorArchetype)>`
    ///
    /// Every archetype is validated; ids must be unique.
    pub fn load(path: &Path) -> LoadResult<ArchetypeCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load catalog {}: {}", path.display(), e))
    }

    /// Parse an archetype catalog from RON source text.
    pub fn parse(content: &str) -> LoadResult<ArchetypeCatalog> {
        let raw_data: Vec<(String, ActorArchetype)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype catalog RON: {}", e))?;

        let mut catalog = ArchetypeCatalog::new();
        for (archetype_id, archetype) in raw_data {
            catalog.insert(archetype_id.as_str(), archetype).map_err(|e| {
                anyhow::anyhow!("Invalid archetype '{}': {}", archetype_id, e)
            })?;
        }

        if catalog.is_empty() {
            anyhow::bail!("Archetype catalog is empty");
        }

        Ok(catalog)
    }
}
