// src/infrastructure/mod.rs
pub mod anki_connect;
pub mod settings_store;

pub use anki_connect::AnkiConnectClient;
pub use settings_store::TomlSettingsStore;
