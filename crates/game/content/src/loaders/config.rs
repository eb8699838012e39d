//! Game configuration loader.

use std::path::Path;

use arena_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML source text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use arena_core::Difficulty;

    use super::*;

    #[test]
    fn parses_full_config() {
        let config = ConfigLoader::parse("max_rounds = 12\ndifficulty = \"hard\"\n").unwrap();
        assert_eq!(config.max_rounds, 12);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(ConfigLoader::parse("difficulty = \"nightmare\"").is_err());
    }
}
