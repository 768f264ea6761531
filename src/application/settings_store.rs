// src/application/settings_store.rs
use crate::domain::{AnkiSettings, DomainError};

/// Key/value persistence for the plugin settings
pub trait SettingsStore {
    /// Read the stored settings; absent values fall back to their defaults
    fn load(&self) -> Result<AnkiSettings, DomainError>;

    fn save(&self, settings: &AnkiSettings) -> Result<(), DomainError>;
}
