// src/domain/settings.rs
use crate::constants::{DEFAULT_CONNECT_URL, DEFAULT_DECK_NAME, DEFAULT_MODEL_NAME};
use crate::domain::DomainError;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Connection and note placement settings of the Anki plugin
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct AnkiSettings {
    #[serde(default = "default_connect_url")]
    pub connect_url: String,
    #[serde(default = "default_deck_name")]
    pub deck_name: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default)]
    pub allow_duplicates: bool,
}

fn default_connect_url() -> String { DEFAULT_CONNECT_URL.to_string() }
fn default_deck_name() -> String { DEFAULT_DECK_NAME.to_string() }
fn default_model_name() -> String { DEFAULT_MODEL_NAME.to_string() }

impl Default for AnkiSettings {
    fn default() -> Self {
        Self {
            connect_url: default_connect_url(),
            deck_name: default_deck_name(),
            model_name: default_model_name(),
            allow_duplicates: false,
        }
    }
}

/// Partial change to [`AnkiSettings`]; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub connect_url: Option<String>,
    pub deck_name: Option<String>,
    pub model_name: Option<String>,
    pub allow_duplicates: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.connect_url.is_none()
            && self.deck_name.is_none()
            && self.model_name.is_none()
            && self.allow_duplicates.is_none()
    }
}

impl AnkiSettings {
    /// Check that the settings can produce a request AnkiConnect will accept
    pub fn validate(&self) -> Result<(), DomainError> {
        let url = Url::parse(&self.connect_url).map_err(|e| {
            DomainError::InvalidSettings(format!("connect URL '{}': {}", self.connect_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidSettings(format!(
                "connect URL '{}' must use http or https",
                self.connect_url
            )));
        }
        if self.deck_name.trim().is_empty() {
            return Err(DomainError::InvalidSettings("deck name is empty".to_string()));
        }
        if self.model_name.trim().is_empty() {
            return Err(DomainError::InvalidSettings("model name is empty".to_string()));
        }
        Ok(())
    }

    /// Merge `update` into a copy of these settings, validating the result.
    ///
    /// Returns the merged settings and whether any value actually changed.
    /// `self` is left untouched when validation fails.
    pub fn apply(&self, update: SettingsUpdate) -> Result<(Self, bool), DomainError> {
        let mut merged = self.clone();
        if let Some(url) = update.connect_url {
            merged.connect_url = url.trim().to_string();
        }
        if let Some(deck) = update.deck_name {
            merged.deck_name = deck;
        }
        if let Some(model) = update.model_name {
            merged.model_name = model;
        }
        if let Some(allow) = update.allow_duplicates {
            merged.allow_duplicates = allow;
        }
        merged.validate()?;

        let changed = merged != *self;
        Ok((merged, changed))
    }
}
