// src/application/plugin.rs
use crate::application::{FlashcardGateway, NoteSender, SettingsStore};
use crate::domain::{AnkiSettings, DomainError, SettingsUpdate};
use serde::Serialize;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, info, instrument};

pub const PLUGIN_ID: &str = "anki";
pub const PLUGIN_NAME: &str = "Anki";
pub const TOOLBAR_TEXT: &str = "Add word to Anki";
pub const ERROR_TITLE: &str = "Anki error";

/// Descriptive data the host shows in its plugin list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PluginMetadata {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub authors: Vec<String>,
    pub features: Vec<String>,
}

impl PluginMetadata {
    pub fn anki() -> Self {
        Self {
            id: PLUGIN_ID.to_string(),
            name: PLUGIN_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Add words with their translations to Anki".to_string(),
            authors: env!("CARGO_PKG_AUTHORS")
                .split(':')
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect(),
            features: vec!["toolbar".to_string()],
        }
    }
}

/// Receives failures of background dispatches, e.g. to show an error dialog
pub trait ErrorReporter {
    fn report(&self, title: &str, message: &str);
}

/// Handle of a dispatched request. Dropping it detaches the request.
pub type Dispatch = JoinHandle<Result<(), DomainError>>;

/// Interface the dictionary host drives a toolbar plugin through
pub trait ToolbarPlugin {
    fn metadata(&self) -> PluginMetadata;

    fn toolbar_text(&self) -> &str;

    /// Act on the current lookup without blocking the host
    fn execute(&self, word: &str, translation: &str) -> Dispatch;

    fn settings(&self) -> &AnkiSettings;

    /// Apply the user's edits; returns whether anything changed
    fn edit_settings(&mut self, update: SettingsUpdate) -> Result<bool, DomainError>;
}

pub struct AnkiPlugin<G, S, E>
where
    G: FlashcardGateway + Send + Sync + 'static,
    S: SettingsStore,
    E: ErrorReporter + Send + Sync + 'static,
{
    sender: Arc<NoteSender<G>>,
    store: S,
    reporter: Arc<E>,
    settings: AnkiSettings,
}

impl<G, S, E> AnkiPlugin<G, S, E>
where
    G: FlashcardGateway + Send + Sync + 'static,
    S: SettingsStore,
    E: ErrorReporter + Send + Sync + 'static,
{
    /// Create the plugin with the settings currently in `store`
    pub fn load(gateway: G, store: S, reporter: E) -> Result<Self, DomainError> {
        let settings = store.load()?;
        debug!(?settings, "Loaded Anki plugin settings");
        Ok(Self {
            sender: Arc::new(NoteSender::new(gateway)),
            store,
            reporter: Arc::new(reporter),
            settings,
        })
    }

    /// Persist the current settings
    #[instrument(level = "debug", skip(self))]
    pub fn shutdown(&self) -> Result<(), DomainError> {
        self.store.save(&self.settings)?;
        info!("Saved Anki plugin settings");
        Ok(())
    }
}

impl<G, S, E> ToolbarPlugin for AnkiPlugin<G, S, E>
where
    G: FlashcardGateway + Send + Sync + 'static,
    S: SettingsStore,
    E: ErrorReporter + Send + Sync + 'static,
{
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata::anki()
    }

    fn toolbar_text(&self) -> &str {
        TOOLBAR_TEXT
    }

    fn execute(&self, word: &str, translation: &str) -> Dispatch {
        let sender = Arc::clone(&self.sender);
        let reporter = Arc::clone(&self.reporter);
        let settings = self.settings.clone();
        let word = word.to_string();
        let translation = translation.to_string();

        thread::spawn(move || {
            let result = sender.send(&settings, &word, &translation);
            match &result {
                Ok(()) => info!(word = %word, deck = %settings.deck_name, "Added word to Anki"),
                Err(e) => {
                    // The reporter is the user-facing channel for this failure
                    debug!(word = %word, error = %e, "Failed to add word to Anki");
                    reporter.report(ERROR_TITLE, &e.to_string());
                }
            }
            result
        })
    }

    fn settings(&self) -> &AnkiSettings {
        &self.settings
    }

    fn edit_settings(&mut self, update: SettingsUpdate) -> Result<bool, DomainError> {
        let (merged, changed) = self.settings.apply(update)?;
        if changed {
            debug!(?merged, "Anki plugin settings changed");
            self.settings = merged;
        }
        Ok(changed)
    }
}
