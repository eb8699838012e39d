//! Turn loop driving a duel between the player and a monster.
//!
//! Each round the monster commits to a move first, then the player's selector
//! sees that choice and answers, then the round is resolved by
//! [`arena_core::resolve_round`]. The loop runs until at least one side is
//! dead.

use std::sync::Arc;

use arena_core::{
    ActorArchetype, ActorState, GameConfig, GameOutcome, MoveIndex, RoundReport, available_moves,
    final_outcome, outcome, resolve_round,
};

use crate::api::{MoveSelector, Result, RuntimeError, SelectionView, Side};

/// Final state of a finished duel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuelSummary {
    pub outcome: GameOutcome,
    pub rounds: u32,
    pub player_health: f64,
    pub monster_health: f64,
}

/// Owns both combatants for the lifetime of one duel.
#[derive(Debug, Clone)]
pub struct Duel {
    player: ActorState,
    monster: ActorState,
    config: GameConfig,
    rounds: u32,
}

impl Duel {
    pub fn new(player: ActorState, monster: ActorState, config: GameConfig) -> Self {
        Self {
            player,
            monster,
            config,
            rounds: 0,
        }
    }

    /// Build both actors from archetypes, applying the configured difficulty
    /// to the player only.
    pub fn from_archetypes(
        player: Arc<ActorArchetype>,
        monster: Arc<ActorArchetype>,
        config: GameConfig,
    ) -> Self {
        let player = ActorState::new(player, config.difficulty.health_delta());
        let monster = ActorState::new(monster, 0.0);
        Self::new(player, monster, config)
    }

    pub fn player(&self) -> &ActorState {
        &self.player
    }

    pub fn monster(&self) -> &ActorState {
        &self.monster
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Rounds resolved so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Current classification, `None` while both sides are alive.
    pub fn outcome(&self) -> Option<GameOutcome> {
        outcome(&self.player, &self.monster)
    }

    /// Play one round: monster selects, player selects, round resolves.
    ///
    /// If selection fails, any choice made this round is withdrawn so both
    /// actors are left as they were.
    pub fn play_round<P, M>(&mut self, player: &mut P, monster: &mut M) -> Result<RoundReport>
    where
        P: MoveSelector + ?Sized,
        M: MoveSelector + ?Sized,
    {
        if self.outcome().is_some() {
            return Err(RuntimeError::DuelOver);
        }

        if let Err(err) = self.commit_choices(player, monster) {
            self.player.clear_choice();
            self.monster.clear_choice();
            tracing::warn!("Round {} aborted: {}", self.rounds + 1, err);
            return Err(err);
        }

        let report = resolve_round(&mut self.player, &mut self.monster)?;
        self.rounds += 1;

        tracing::debug!(
            round = self.rounds,
            player_move = %report.first.used,
            monster_move = %report.second.used,
            damage_to_player = report.first.damage_taken.total(),
            damage_to_monster = report.second.damage_taken.total(),
            player_health = report.first.health_after,
            monster_health = report.second.health_after,
            "round resolved"
        );

        Ok(report)
    }

    /// Play rounds until one side dies, then classify the result.
    ///
    /// # Errors
    ///
    /// - [`RuntimeError::RoundLimitReached`] when `config.max_rounds` rounds
    ///   pass without a death
    /// - any selection or combat error from [`Duel::play_round`]
    pub fn run<P, M>(&mut self, player: &mut P, monster: &mut M) -> Result<DuelSummary>
    where
        P: MoveSelector + ?Sized,
        M: MoveSelector + ?Sized,
    {
        tracing::info!(
            "Duel started: {} ({}) vs {} ({})",
            self.player.display_name(),
            self.player.health(),
            self.monster.display_name(),
            self.monster.health()
        );

        let limit = self.config.round_limit();
        while self.outcome().is_none() {
            if limit.is_some_and(|limit| self.rounds >= limit) {
                tracing::warn!("Duel undecided after {} rounds", self.rounds);
                return Err(RuntimeError::RoundLimitReached {
                    rounds: self.rounds,
                });
            }
            self.play_round(player, monster)?;
        }

        self.finish()
    }

    /// Classify a duel whose loop has stopped.
    ///
    /// Stopping while both actors are alive is a driver defect and fails with
    /// [`arena_core::CombatError::ImpossibleGameState`].
    pub fn finish(&self) -> Result<DuelSummary> {
        let outcome = final_outcome(&self.player, &self.monster).inspect_err(|err| {
            tracing::error!("Duel stopped in an impossible state: {}", err);
        })?;

        tracing::info!(
            "Duel finished after {} rounds: {} (player {}, monster {})",
            self.rounds,
            outcome,
            self.player.health(),
            self.monster.health()
        );

        Ok(DuelSummary {
            outcome,
            rounds: self.rounds,
            player_health: self.player.health(),
            monster_health: self.monster.health(),
        })
    }

    fn commit_choices<P, M>(&mut self, player: &mut P, monster: &mut M) -> Result<()>
    where
        P: MoveSelector + ?Sized,
        M: MoveSelector + ?Sized,
    {
        let choice = select(monster, Side::Monster, &self.monster, &self.player, None)?;
        self.monster.choose_move(choice)?;

        let telegraphed = self.monster.chosen_move();
        let choice = select(player, Side::Player, &self.player, &self.monster, telegraphed)?;
        self.player.choose_move(choice)?;

        Ok(())
    }
}

fn select<S>(
    selector: &mut S,
    side: Side,
    actor: &ActorState,
    opponent: &ActorState,
    opponent_choice: Option<MoveIndex>,
) -> Result<MoveIndex>
where
    S: MoveSelector + ?Sized,
{
    let available = available_moves(actor);
    if available.is_empty() {
        tracing::error!("{} has no available move", side);
        return Err(RuntimeError::NoAvailableMoves { side });
    }

    let view = SelectionView {
        side,
        actor,
        opponent,
        available: &available,
        opponent_choice,
    };
    selector.select(&view)
}

#[cfg(test)]
mod tests {
    use arena_core::{CombatError, Difficulty, MoveDefinition};

    use super::*;
    use crate::providers::ScriptedSelector;

    fn archetype(name: &str, moves: Vec<MoveDefinition>) -> Arc<ActorArchetype> {
        Arc::new(ActorArchetype::new(name, 10.0, moves).unwrap())
    }

    fn duel() -> Duel {
        let player = archetype(
            "Hero",
            vec![
                MoveDefinition::new("Cut").with_damage(3.0, 0.0),
                MoveDefinition::new("Shield").with_armor(100, 100).with_cooldown(2),
            ],
        );
        let monster = archetype("Imp", vec![MoveDefinition::new("Scratch").with_damage(2.0, 0.0)]);
        Duel::from_archetypes(player, monster, GameConfig::default())
    }

    #[test]
    fn difficulty_only_affects_player() {
        let duel = Duel::from_archetypes(
            archetype("Hero", vec![MoveDefinition::new("Cut")]),
            archetype("Imp", vec![MoveDefinition::new("Cut")]),
            GameConfig::default().with_difficulty(Difficulty::Hard),
        );
        assert_eq!(duel.player().health(), 8.0);
        assert_eq!(duel.monster().health(), 10.0);
    }

    #[test]
    fn illegal_selection_leaves_duel_untouched() {
        let mut duel = duel();
        let mut player = ScriptedSelector::from_indices([1, 1]);
        let mut monster = ScriptedSelector::from_indices([0, 0]);
        duel.play_round(&mut player, &mut monster).unwrap();

        let before = (duel.player().clone(), duel.monster().clone());
        let err = duel.play_round(&mut player, &mut monster).unwrap_err();

        assert!(matches!(
            err,
            RuntimeError::Combat(CombatError::MoveOnCooldown { remaining: 2, .. })
        ));
        assert_eq!((duel.player().clone(), duel.monster().clone()), before);
        assert_eq!(duel.rounds(), 1);
    }

    #[test]
    fn exhausted_script_withdraws_monster_choice() {
        let mut duel = duel();
        let mut player = ScriptedSelector::default();
        let mut monster = ScriptedSelector::from_indices([0]);

        let err = duel.play_round(&mut player, &mut monster).unwrap_err();

        assert_eq!(err, RuntimeError::ScriptExhausted { side: Side::Player });
        assert_eq!(duel.monster().chosen_move(), None);
    }

    #[test]
    fn stopping_early_is_an_impossible_state() {
        let duel = duel();
        let err = duel.finish().unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Combat(CombatError::ImpossibleGameState { .. })
        ));
    }
}
