// src/application/mod.rs
pub mod note_sender;
pub mod plugin;
pub mod settings_store;

pub use note_sender::{FlashcardGateway, NoteSender};
pub use plugin::{AnkiPlugin, ErrorReporter, PluginMetadata, ToolbarPlugin};
pub use settings_store::SettingsStore;
