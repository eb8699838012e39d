use strum::{Display, EnumIter, EnumString};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound on rounds a duel may run before the driver gives up.
    /// Zero disables the limit.
    pub max_rounds: u32,

    /// Difficulty applied to the player's starting health.
    pub difficulty: Difficulty,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of moves an archetype may define.
    pub const MAX_MOVES: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            difficulty: Difficulty::default(),
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Round limit, or `None` when the limit is disabled.
    pub fn round_limit(&self) -> Option<u32> {
        (self.max_rounds > 0).then_some(self.max_rounds)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Difficulty level, expressed as a reduction of the player's starting health.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    /// Health added to the player's archetype maximum (never positive).
    pub const fn health_delta(self) -> f64 {
        match self {
            Self::Easy => 0.0,
            Self::Normal => -1.0,
            Self::Hard => -2.0,
            Self::Extreme => -3.0,
        }
    }
}
