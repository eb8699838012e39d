use std::sync::Arc;

use arena_content::builtin::{self, MONSTER_ID, PLAYER_ID};
use arena_core::{ActorArchetype, Difficulty, GameConfig, GameOutcome, MoveIndex};
use arena_runtime::{
    Duel, FirstAvailableSelector, MoveSelector, RandomSelector, Result, RuntimeError,
    ScriptedSelector, SelectionView, Side,
};

fn builtin_pair() -> (Arc<ActorArchetype>, Arc<ActorArchetype>) {
    let catalog = builtin::catalog().unwrap();
    (
        catalog.get(PLAYER_ID).unwrap(),
        catalog.get(MONSTER_ID).unwrap(),
    )
}

fn builtin_duel(config: GameConfig) -> Duel {
    let (player, monster) = builtin_pair();
    Duel::from_archetypes(player, monster, config)
}

#[test]
fn player_outlasts_monster_with_scripted_moves() {
    let mut duel = builtin_duel(GameConfig::default());
    // Fireball, Left-Heel Spin, Censer Strike
    let mut player = ScriptedSelector::from_indices([2, 1, 0]);
    // Tail Lash, Claw Swipe, Fire Breath
    let mut monster = ScriptedSelector::from_indices([2, 0, 1]);

    let summary = duel.run(&mut player, &mut monster).unwrap();

    assert_eq!(summary.outcome, GameOutcome::PlayerWins);
    assert_eq!(summary.rounds, 3);
    assert_eq!(summary.player_health, 3.0);
    assert!((summary.monster_health - -0.2).abs() < 1e-9);
    assert_eq!(player.remaining(), 0);
    assert_eq!(monster.remaining(), 0);
}

#[test]
fn lowest_moves_every_round_lose_to_the_monster() {
    let mut duel = builtin_duel(GameConfig::default());

    let summary = duel
        .run(&mut FirstAvailableSelector, &mut FirstAvailableSelector)
        .unwrap();

    assert_eq!(summary.outcome, GameOutcome::MonsterWins);
    assert_eq!(summary.rounds, 4);
    assert_eq!(summary.player_health, -2.0);
    assert!((summary.monster_health - 3.6).abs() < 1e-9);
}

#[test]
fn simultaneous_deaths_end_in_a_draw() {
    let mut duel = builtin_duel(GameConfig::default());
    // Fireball, Spin, Censer Strike, Magic Block, Fireball again once ready
    let mut player = ScriptedSelector::from_indices([2, 1, 0, 3, 2]);
    let mut monster = ScriptedSelector::from_indices([0; 5]);

    let summary = duel.run(&mut player, &mut monster).unwrap();

    assert_eq!(summary.outcome, GameOutcome::Draw);
    assert_eq!(summary.rounds, 5);
    assert!(summary.player_health <= 0.0);
    assert!(summary.monster_health <= 0.0);
}

#[test]
fn difficulty_lowers_player_starting_health() {
    let duel = builtin_duel(GameConfig::default().with_difficulty(Difficulty::Extreme));
    assert_eq!(duel.player().health(), 7.0);
    assert_eq!(duel.monster().health(), 10.0);
}

#[test]
fn finished_duel_rejects_more_rounds() {
    let mut duel = builtin_duel(GameConfig::default());
    duel.run(&mut FirstAvailableSelector, &mut FirstAvailableSelector)
        .unwrap();

    let err = duel
        .play_round(&mut FirstAvailableSelector, &mut FirstAvailableSelector)
        .unwrap_err();
    assert_eq!(err, RuntimeError::DuelOver);
}

#[test]
fn round_limit_stops_undecided_duel() {
    let mut duel = builtin_duel(GameConfig::default().with_max_rounds(2));

    let err = duel
        .run(&mut FirstAvailableSelector, &mut FirstAvailableSelector)
        .unwrap_err();

    assert_eq!(err, RuntimeError::RoundLimitReached { rounds: 2 });
    assert_eq!(duel.rounds(), 2);
    assert!(duel.outcome().is_none());
}

#[test]
fn exhausted_script_surfaces_the_side() {
    let mut duel = builtin_duel(GameConfig::default());
    let mut player = ScriptedSelector::from_indices([0]);
    let mut monster = ScriptedSelector::from_indices([0]);

    let err = duel.run(&mut player, &mut monster).unwrap_err();

    assert_eq!(err, RuntimeError::ScriptExhausted { side: Side::Monster });
    assert_eq!(duel.rounds(), 1);
}

#[test]
fn seeded_random_duels_are_reproducible() {
    let play = |seed: u64| {
        let mut duel = builtin_duel(GameConfig::default().with_difficulty(Difficulty::Normal));
        let mut player = RandomSelector::seeded(seed);
        let mut monster = RandomSelector::seeded(seed.wrapping_add(1));
        duel.run(&mut player, &mut monster).unwrap()
    };

    let first = play(2024);
    let second = play(2024);

    assert_eq!(first, second);
    assert!(first.rounds > 0);
}

/// Records what the player was shown and always answers with the lowest move.
#[derive(Default)]
struct Observer {
    seen: Vec<(Side, Option<MoveIndex>, Vec<MoveIndex>)>,
}

impl MoveSelector for Observer {
    fn select(&mut self, view: &SelectionView<'_>) -> Result<MoveIndex> {
        self.seen
            .push((view.side, view.opponent_choice, view.available.to_vec()));
        Ok(view.available[0])
    }
}

#[test]
fn player_sees_the_monster_choice_and_cooled_down_moves_are_hidden() {
    let mut duel = builtin_duel(GameConfig::default());
    let mut player = ScriptedSelector::from_indices([3]);
    let mut monster = Observer::default();
    duel.play_round(&mut player, &mut monster).unwrap();

    let mut observer = Observer::default();
    let mut monster = ScriptedSelector::from_indices([1]);
    duel.play_round(&mut observer, &mut monster).unwrap();

    assert_eq!(monster.remaining(), 0);
    let (side, opponent_choice, available) = &observer.seen[0];
    assert_eq!(*side, Side::Player);
    assert_eq!(*opponent_choice, Some(MoveIndex(1)));
    // Magic Block was used last round and is still cooling down.
    assert_eq!(
        available,
        &vec![MoveIndex(0), MoveIndex(1), MoveIndex(2)]
    );
}
