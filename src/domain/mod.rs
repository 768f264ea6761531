// src/domain/mod.rs
pub mod error;
pub mod request;
pub mod settings;

pub use error::DomainError;
pub use request::AddNoteRequest;
pub use settings::{AnkiSettings, SettingsUpdate};
