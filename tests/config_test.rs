//! Tests for loading game configuration.

use std::io::Write;
use tempfile::NamedTempFile;
use unbeatable_tictactoe::{GameConfig, GameMode, Player, Theme};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.mode(), GameMode::TwoPlayer);
    assert_eq!(*config.ai_player(), Player::O);
    assert_eq!(*config.ai_delay_ms(), 350);
    assert_eq!(*config.theme(), Theme::Dark);
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
mode = "vs_ai"
ai_player = "X"
ai_delay_ms = 0
theme = "light"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::VsAi);
    assert_eq!(*config.ai_player(), Player::X);
    assert_eq!(*config.ai_delay_ms(), 0);
    assert_eq!(*config.theme(), Theme::Light);
}

#[test]
fn test_accepts_command_line_spelling() {
    let file = write_config(
        r#"
mode = "vs-ai"
ai_player = "x"
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::VsAi);
    assert_eq!(*config.ai_player(), Player::X);

    let file = write_config("mode = \"two-player\"\nai_player = \"o\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::TwoPlayer);
    assert_eq!(*config.ai_player(), Player::O);
}

#[test]
fn test_missing_keys_take_defaults() {
    let file = write_config("mode = \"vs_ai\"\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default().with_mode(GameMode::VsAi));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_invalid_toml_is_error() {
    let file = write_config("mode = \"chess\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{}", err);
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = GameConfig::default()
        .with_mode(GameMode::VsAi)
        .with_ai_player(Player::X)
        .with_ai_delay_ms(10);
    let text = toml::to_string(&config).unwrap();
    let file = write_config(&text);
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), config);
}
