//! Round resolution: one simultaneous exchange of chosen moves.

use super::{CombatError, DamageBreakdown, calculate_breakdown};
use crate::catalog::MoveIndex;
use crate::state::ActorState;

/// What happened to one side during a round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exchange {
    /// Move this actor used.
    pub used: MoveIndex,
    /// Damage this actor received.
    pub damage_taken: DamageBreakdown,
    /// Health after the damage was applied.
    pub health_after: f64,
}

/// Result of [`resolve_round`], ordered like its arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundReport {
    pub first: Exchange,
    pub second: Exchange,
}

/// Resolve one round between two actors that have both chosen a move.
///
/// Both damages are computed from the pre-round state, so argument order does
/// not change the result. Then, for each actor:
///
/// 1. health drops by the damage received
/// 2. cooldowns age by one round (a remaining count of one is cleared)
/// 3. the used move starts its own cooldown, if it has one
/// 4. the chosen move is reset
///
/// # Errors
///
/// [`CombatError::MovesNotChosen`] if either actor has no chosen move. Neither
/// actor is modified in that case.
pub fn resolve_round(
    first: &mut ActorState,
    second: &mut ActorState,
) -> Result<RoundReport, CombatError> {
    let (Some(first_move), Some(second_move)) = (first.chosen_move(), second.chosen_move()) else {
        return Err(CombatError::MovesNotChosen {
            first: first.chosen_move().is_none(),
            second: second.chosen_move().is_none(),
        });
    };

    let to_first = calculate_breakdown(second, first)?;
    let to_second = calculate_breakdown(first, second)?;

    first.take_damage(to_first.total());
    second.take_damage(to_second.total());

    first.finish_round(first_move);
    second.finish_round(second_move);

    Ok(RoundReport {
        first: Exchange {
            used: first_move,
            damage_taken: to_first,
            health_after: first.health(),
        },
        second: Exchange {
            used: second_move,
            damage_taken: to_second,
            health_after: second.health(),
        },
    })
}
