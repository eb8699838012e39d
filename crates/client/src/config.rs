//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use arena_content::builtin::{MONSTER_ID, PLAYER_ID};
use arena_core::{Difficulty, GameConfig};
use strum::{Display, EnumString};

/// Which game the binary plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Mode {
    #[default]
    Duel,
    Guess,
}

/// Settings for one run of the binary.
///
/// Game settings start from the config file (or the built-in defaults) and
/// environment values override them.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub mode: Mode,
    /// TOML game configuration; built-in defaults when unset.
    pub config_path: Option<PathBuf>,
    /// RON archetype catalog; built-in catalog when unset.
    pub catalog_path: Option<PathBuf>,
    pub difficulty: Option<Difficulty>,
    pub max_rounds: Option<u32>,
    /// Seed for the move selectors or the guessing game; entropy when unset.
    pub seed: Option<u64>,
    pub player_id: String,
    pub monster_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            config_path: None,
            catalog_path: None,
            difficulty: None,
            max_rounds: None,
            seed: None,
            player_id: PLAYER_ID.to_owned(),
            monster_id: MONSTER_ID.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_MODE` - duel (default) or guess
    /// - `ARENA_CONFIG` - path to a TOML game configuration
    /// - `ARENA_CATALOG` - path to a RON archetype catalog
    /// - `ARENA_DIFFICULTY` - easy, normal, hard or extreme
    /// - `ARENA_MAX_ROUNDS` - round limit, 0 disables it
    /// - `ARENA_SEED` - seed for reproducible runs
    /// - `ARENA_PLAYER` / `ARENA_MONSTER` - archetype ids (default: player / monster)
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self {
            mode: read_env("ARENA_MODE").unwrap_or_default(),
            config_path: read_env("ARENA_CONFIG"),
            catalog_path: read_env("ARENA_CATALOG"),
            difficulty: read_env("ARENA_DIFFICULTY"),
            max_rounds: read_env("ARENA_MAX_ROUNDS"),
            seed: read_env("ARENA_SEED"),
            ..Self::default()
        };

        if let Some(id) = read_env::<String>("ARENA_PLAYER") {
            config.player_id = id;
        }
        if let Some(id) = read_env::<String>("ARENA_MONSTER") {
            config.monster_id = id;
        }

        config
    }

    /// Apply environment overrides on top of file or built-in settings.
    pub fn apply(&self, mut game: GameConfig) -> GameConfig {
        if let Some(difficulty) = self.difficulty {
            game.difficulty = difficulty;
        }
        if let Some(max_rounds) = self.max_rounds {
            game.max_rounds = max_rounds;
        }
        game
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_what_is_set() {
        let client = ClientConfig {
            difficulty: Some(Difficulty::Hard),
            ..ClientConfig::default()
        };

        let game = client.apply(GameConfig::default().with_max_rounds(7));

        assert_eq!(game.difficulty, Difficulty::Hard);
        assert_eq!(game.max_rounds, 7);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("guess".parse::<Mode>(), Ok(Mode::Guess));
        assert_eq!("DUEL".parse::<Mode>(), Ok(Mode::Duel));
        assert!("chess".parse::<Mode>().is_err());
        assert_eq!(ClientConfig::default().mode, Mode::Duel);
    }

    #[test]
    fn defaults_point_at_builtin_archetypes() {
        let client = ClientConfig::default();
        assert_eq!(client.player_id, PLAYER_ID);
        assert_eq!(client.monster_id, MONSTER_ID);
        assert!(client.seed.is_none());
    }
}
