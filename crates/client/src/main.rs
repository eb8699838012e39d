//! Arena client binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment and an optional TOML file
//! 2. Content (the built-in catalog or a RON file)
//! 3. A duel driven by random move selectors on both sides, or an
//!    automatically played guessing session (`ARENA_MODE=guess`)
//!
//! # Examples
//!
//! ```bash
//! # Built-in content, hard difficulty, reproducible run
//! ARENA_DIFFICULTY=hard ARENA_SEED=7 cargo run -p arena-client
//!
//! # Guessing game with per-attempt feedback in the logs
//! ARENA_MODE=guess RUST_LOG=debug cargo run -p arena-client
//!
//! # Custom catalog with verbose round logs
//! ARENA_CATALOG=data/archetypes.ron RUST_LOG=debug cargo run -p arena-client
//! ```

mod config;
mod logging;

use anyhow::{Context, Result};
use arena_content::{ArchetypeLoader, ConfigLoader, builtin};
use arena_core::{ArchetypeCatalog, GameConfig, GuessResult};
use arena_runtime::{Duel, RandomSelector, guess};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{ClientConfig, Mode};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration
    let client_config = ClientConfig::from_env();
    logging::setup_logging()?;

    tracing::info!("Starting arena client ({} mode)", client_config.mode);

    if client_config.mode == Mode::Guess {
        return run_guess(client_config.seed);
    }

    let game_config = client_config.apply(load_game_config(&client_config)?);
    tracing::info!(
        "Difficulty: {}, round limit: {}",
        game_config.difficulty,
        game_config.max_rounds
    );

    // 2. Load content
    let catalog = load_catalog(&client_config)?;
    let player = catalog
        .get(&client_config.player_id)
        .with_context(|| format!("Unknown player archetype '{}'", client_config.player_id))?;
    let monster = catalog
        .get(&client_config.monster_id)
        .with_context(|| format!("Unknown monster archetype '{}'", client_config.monster_id))?;

    // 3. Run the duel
    let (mut player_selector, mut monster_selector) = match client_config.seed {
        Some(seed) => {
            tracing::info!("Seed: {}", seed);
            (
                RandomSelector::seeded(seed),
                RandomSelector::seeded(seed.wrapping_add(1)),
            )
        }
        None => (RandomSelector::from_entropy(), RandomSelector::from_entropy()),
    };

    let mut duel = Duel::from_archetypes(player, monster, game_config);
    let summary = duel
        .run(&mut player_selector, &mut monster_selector)
        .context("Duel failed")?;

    println!(
        "{} after {} rounds (player {:.1} hp, monster {:.1} hp)",
        summary.outcome, summary.rounds, summary.player_health, summary.monster_health
    );

    Ok(())
}

fn load_game_config(client: &ClientConfig) -> Result<GameConfig> {
    match &client.config_path {
        Some(path) => {
            tracing::debug!("Loading game config from {}", path.display());
            ConfigLoader::load(path)
        }
        None => builtin::config(),
    }
}

fn load_catalog(client: &ClientConfig) -> Result<ArchetypeCatalog> {
    match &client.catalog_path {
        Some(path) => {
            tracing::debug!("Loading archetype catalog from {}", path.display());
            ArchetypeLoader::load(path)
        }
        None => Ok(builtin::catalog()?.clone()),
    }
}

fn run_guess(seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => {
            tracing::info!("Seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut session = guess::new_session(&mut rng).context("Failed to start guessing session")?;
    tracing::info!(
        "Secret has {} digits, {} attempts allowed",
        session.secret().len(),
        session.attempts_left()
    );

    let last = guess::auto_play(&mut session, &mut rng).context("Guessing session failed")?;
    match last {
        GuessResult::Solved { attempts_used } => {
            println!("solved {} in {} attempts", session.secret(), attempts_used);
        }
        GuessResult::Miss { .. } => {
            println!("out of attempts, the secret was {}", session.secret());
        }
    }

    Ok(())
}
