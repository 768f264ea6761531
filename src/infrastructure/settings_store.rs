// src/infrastructure/settings_store.rs
use crate::application::SettingsStore;
use crate::constants::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::domain::{AnkiSettings, DomainError};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::{debug, instrument};

const ANKI_TABLE: &str = "anki";

/// On-disk layout: the plugin owns the `[anki]` table
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    anki: AnkiSettings,
}

/// Settings kept in a TOML file shared with the dictionary host
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/qstardict/anki.toml`
    pub fn default_path() -> Result<PathBuf, DomainError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            DomainError::Settings("Could not find configuration directory".to_string())
        })?;
        Ok(config_dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File content, or `None` when the file does not exist yet
    fn read_existing(&self) -> Result<Option<String>, DomainError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Settings(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl SettingsStore for TomlSettingsStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<AnkiSettings, DomainError> {
        let Some(content) = self.read_existing()? else {
            debug!("No settings file, using defaults");
            return Ok(AnkiSettings::default());
        };

        let file: SettingsFile = toml::from_str(&content).map_err(|e| {
            DomainError::Settings(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        Ok(file.anki)
    }

    /// Replace the `[anki]` table; every other table and key in the file is kept
    #[instrument(level = "debug", skip(self, settings), fields(path = %self.path.display()))]
    fn save(&self, settings: &AnkiSettings) -> Result<(), DomainError> {
        let mut table = match self.read_existing()? {
            Some(content) => toml::from_str::<Table>(&content).map_err(|e| {
                DomainError::Settings(format!("Failed to parse {}: {}", self.path.display(), e))
            })?,
            None => Table::new(),
        };
        let anki = Value::try_from(settings)
            .map_err(|e| DomainError::Settings(format!("Failed to serialize settings: {}", e)))?;
        table.insert(ANKI_TABLE.to_string(), anki);

        let content = toml::to_string_pretty(&table)
            .map_err(|e| DomainError::Settings(format!("Failed to serialize settings: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::Settings(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        fs::write(&self.path, content).map_err(|e| {
            DomainError::Settings(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}
