//! Move definitions and their catalog identity.

use core::fmt;

/// Position of a move inside its archetype's move list.
///
/// The index is the move's identity: cooldowns and choices refer to moves by
/// index, never by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveIndex(pub usize);

impl MoveIndex {
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for MoveIndex {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Immutable description of a single move.
///
/// Damage values are what the move deals when its user attacks. Armor
/// percentages apply to damage the user *receives* in the same round, so a
/// move is an attack and a defensive stance at once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDefinition {
    /// Display label, never used for identity.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub physical_damage: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_damage: f64,
    /// Mitigation (0-100) of incoming physical damage while this move is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub physical_armor_percent: u8,
    /// Mitigation (0-100) of incoming magic damage while this move is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub magic_armor_percent: u8,
    /// Rounds the move stays unavailable after use. Zero means reusable every round.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown_turns: u32,
}

impl MoveDefinition {
    /// Upper bound for armor percentages.
    pub const MAX_ARMOR_PERCENT: u8 = 100;

    /// Creates a move that deals no damage, blocks nothing, and has no cooldown.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            physical_damage: 0.0,
            magic_damage: 0.0,
            physical_armor_percent: 0,
            magic_armor_percent: 0,
            cooldown_turns: 0,
        }
    }

    #[must_use]
    pub fn with_damage(mut self, physical: f64, magic: f64) -> Self {
        self.physical_damage = physical;
        self.magic_damage = magic;
        self
    }

    #[must_use]
    pub fn with_armor(mut self, physical_percent: u8, magic_percent: u8) -> Self {
        self.physical_armor_percent = physical_percent;
        self.magic_armor_percent = magic_percent;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown_turns = turns;
        self
    }

    /// Returns true if the move can be used every round.
    #[inline]
    pub const fn is_reusable(&self) -> bool {
        self.cooldown_turns == 0
    }
}

impl fmt::Display for MoveDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ attack: {}/{}, defense: {}/{} }}",
            self.name,
            self.physical_damage,
            self.magic_damage,
            self.physical_armor_percent,
            self.magic_armor_percent
        )
    }
}
