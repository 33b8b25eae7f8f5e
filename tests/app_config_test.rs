//! Loading application configuration from disk.

use gridtoe::cli::GameArgs;
use gridtoe::{AppConfig, PlayerKind, RetryPolicy, Variant};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(text.as_bytes()).expect("write config");
    file
}

#[test]
fn test_from_file() {
    let file = write_config(
        r#"
        [game]
        size = 5
        variant = { kind = "bounded_memory", window = 4 }

        [players.second]
        kind = "human"
        name = "Bo"
        "#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.game().size(), 5);
    assert_eq!(config.game().variant().window(), Some(4));
    assert_eq!(*config.game().retries(), RetryPolicy::Unbounded);
    assert_eq!(*config.players().first().kind(), PlayerKind::Human);
    assert_eq!(config.players().second().name(), "Bo");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_flags_override_file() {
    let file = write_config("[game]\nsize = 6\nvariant = { kind = \"bounded_memory\", window = 2 }\n");
    let args = GameArgs {
        config: Some(file.path().to_path_buf()),
        classic: true,
        max_retries: Some(1),
        second_name: Some("Dice".to_string()),
        ..GameArgs::default()
    };

    let config = args.resolve().unwrap();
    assert_eq!(*config.game().size(), 6);
    assert_eq!(*config.game().variant(), Variant::Classic);
    assert_eq!(*config.game().retries(), RetryPolicy::Limited(1));
    assert_eq!(config.players().second().name(), "Dice");
}

#[test]
fn test_rendered_config_loads_back() {
    let config = GameArgs {
        size: Some(4),
        window: Some(3),
        seed: Some(5),
        ..GameArgs::default()
    }
    .resolve()
    .unwrap();

    let file = write_config(&config.to_toml().unwrap());
    assert_eq!(AppConfig::from_file(file.path()).unwrap(), config);
}
