use std::fs;

use arena_content::ContentFactory;
use arena_content::builtin::{ARCHETYPES_RON, CONFIG_TOML};
use arena_core::{Difficulty, GameConfig};

#[test]
fn factory_loads_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("archetypes.ron"), ARCHETYPES_RON).unwrap();
    fs::write(dir.path().join("config.toml"), CONFIG_TOML).unwrap();

    let factory = ContentFactory::new(dir.path());
    let catalog = factory.load_catalog().unwrap();
    let config = factory.load_config().unwrap();

    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["monster", "player"]);
    assert_eq!(config, GameConfig::default());
}

#[test]
fn factory_reads_custom_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "max_rounds = 0\ndifficulty = \"extreme\"\n",
    )
    .unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();

    assert_eq!(config.round_limit(), None);
    assert_eq!(config.difficulty, Difficulty::Extreme);
}

#[test]
fn missing_files_report_their_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();

    assert!(err.to_string().contains("archetypes.ron"), "{err}");
}
