mod helpers;

use anyhow::Result;
use dictanki::application::SettingsStore;
use dictanki::cli::args::{Args, Command};
use dictanki::infrastructure::TomlSettingsStore;
use helpers::{unreachable_url, StubAnkiConnect, TestSettingsDir};

fn args(config: &std::path::Path, command: Command) -> Args {
    Args {
        config: Some(config.to_path_buf()),
        verbose: 0,
        command,
    }
}

#[test]
fn given_add_command_when_running_then_note_reaches_anki_connect() -> Result<()> {
    // Arrange
    let stub = StubAnkiConnect::accepting()?;
    let dir = TestSettingsDir::with_connect_url(stub.url())?;

    // Act
    dictanki::run(args(
        &dir.settings_path,
        Command::Add {
            word: "Schule".to_string(),
            translation: "school".to_string(),
        },
    ))?;

    // Assert
    let captured = stub.captured()?;
    assert_eq!(captured.body["params"]["note"]["fields"]["Front"], "Schule");
    Ok(())
}

#[test]
fn given_add_command_and_anki_down_when_running_then_fails() -> Result<()> {
    // Arrange
    let dir = TestSettingsDir::with_connect_url(&unreachable_url()?)?;

    // Act
    let result = dictanki::run(args(
        &dir.settings_path,
        Command::Add {
            word: "Schule".to_string(),
            translation: "school".to_string(),
        },
    ));

    // Assert
    let err = result.expect_err("Should fail when Anki is unreachable");
    assert!(err.to_string().contains("Schule"));
    // the reporter already printed the cause; the returned error only names the word
    assert!(!err.to_string().contains("network error"));
    Ok(())
}

#[test]
fn given_settings_options_when_running_then_saves_them() -> Result<()> {
    // Arrange
    let dir = TestSettingsDir::new()?;

    // Act
    dictanki::run(args(
        &dir.settings_path,
        Command::Settings {
            url: None,
            deck: Some("Korean".to_string()),
            model: None,
            allow_duplicates: Some(true),
        },
    ))?;

    // Assert
    let saved = TomlSettingsStore::new(&dir.settings_path).load()?;
    assert_eq!(saved.deck_name, "Korean");
    assert!(saved.allow_duplicates);
    assert_eq!(saved.model_name, "Basic");
    Ok(())
}

#[test]
fn given_invalid_url_when_running_settings_then_fails_without_saving() -> Result<()> {
    // Arrange
    let dir = TestSettingsDir::new()?;

    // Act
    let result = dictanki::run(args(
        &dir.settings_path,
        Command::Settings {
            url: Some("localhost".to_string()),
            deck: None,
            model: None,
            allow_duplicates: None,
        },
    ));

    // Assert
    assert!(result.is_err());
    assert!(!dir.settings_path.exists());
    Ok(())
}

#[test]
fn given_settings_file_with_host_tables_when_running_settings_then_keeps_them() -> Result<()> {
    // Arrange
    let dir = TestSettingsDir::new()?;
    std::fs::create_dir_all(dir.settings_path.parent().expect("Settings path has a parent"))?;
    std::fs::write(&dir.settings_path, "[general]\nfont = \"Sans\"\n")?;

    // Act
    dictanki::run(args(
        &dir.settings_path,
        Command::Settings {
            url: None,
            deck: Some("Korean".to_string()),
            model: None,
            allow_duplicates: None,
        },
    ))?;

    // Assert
    let content = std::fs::read_to_string(&dir.settings_path)?;
    let table: toml::Table = toml::from_str(&content)?;
    assert_eq!(table["general"]["font"].as_str(), Some("Sans"));
    assert_eq!(table["anki"]["deck_name"].as_str(), Some("Korean"));
    Ok(())
}

#[test]
fn given_settings_without_options_when_running_then_shows_without_saving() -> Result<()> {
    // Arrange
    let dir = TestSettingsDir::new()?;

    // Act
    dictanki::run(args(
        &dir.settings_path,
        Command::Settings {
            url: None,
            deck: None,
            model: None,
            allow_duplicates: None,
        },
    ))?;

    // Assert
    assert!(!dir.settings_path.exists());
    Ok(())
}

#[test]
fn given_request_command_when_running_then_succeeds_without_anki() -> Result<()> {
    // Arrange - nothing listens on the configured URL
    let dir = TestSettingsDir::with_connect_url(&unreachable_url()?)?;
    let before = std::fs::read_to_string(&dir.settings_path)?;

    // Act
    dictanki::run(args(
        &dir.settings_path,
        Command::Request {
            word: "Schule".to_string(),
            translation: "school".to_string(),
        },
    ))?;

    // Assert
    assert_eq!(std::fs::read_to_string(&dir.settings_path)?, before);
    Ok(())
}

#[test]
fn given_info_json_command_when_running_then_succeeds() -> Result<()> {
    // Arrange
    let dir = TestSettingsDir::new()?;

    // Act
    let result = dictanki::run(args(&dir.settings_path, Command::Info { json: true }));

    // Assert
    assert!(result.is_ok());
    assert!(!dir.settings_path.exists());
    Ok(())
}
