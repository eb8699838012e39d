//! Damage calculation.

use super::CombatError;
use crate::state::ActorState;

// ============================================================================
// Mitigation
// ============================================================================

/// Reduce `amount` by `armor_percent` percent.
///
/// # Formula
///
/// ```text
/// mitigated = amount * (100 - armor_percent) / 100
/// ```
///
/// No rounding is applied. Percentages above 100 are treated as 100.
#[inline]
pub fn mitigated(amount: f64, armor_percent: u8) -> f64 {
    amount * f64::from(100u8.saturating_sub(armor_percent)) / 100.0
}

// ============================================================================
// Damage Calculation
// ============================================================================

/// Damage of one exchange, split by type after mitigation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DamageBreakdown {
    pub physical: f64,
    pub magic: f64,
}

impl DamageBreakdown {
    pub fn total(&self) -> f64 {
        self.physical + self.magic
    }
}

/// Damage the attacker's chosen move deals against the defender's chosen move.
///
/// Armor comes from the defender's move this round, not from a persistent
/// stat. Both actors must have a move chosen; `first` in the error refers to
/// the attacker and `second` to the defender.
pub fn calculate_breakdown(
    attacker: &ActorState,
    defender: &ActorState,
) -> Result<DamageBreakdown, CombatError> {
    let (Some(attack), Some(defend)) = (attacker.chosen_definition(), defender.chosen_definition())
    else {
        return Err(CombatError::MovesNotChosen {
            first: attacker.chosen_move().is_none(),
            second: defender.chosen_move().is_none(),
        });
    };

    Ok(DamageBreakdown {
        physical: mitigated(attack.physical_damage, defend.physical_armor_percent),
        magic: mitigated(attack.magic_damage, defend.magic_armor_percent),
    })
}

/// Total damage the attacker deals to the defender this round.
pub fn calculate_damage(attacker: &ActorState, defender: &ActorState) -> Result<f64, CombatError> {
    calculate_breakdown(attacker, defender).map(|breakdown| breakdown.total())
}
