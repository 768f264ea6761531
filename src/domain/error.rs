// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error(
        "Unable to add the word to Anki: network error. Check if Anki is running and \
         AnkiConnect add-on is installed to Anki (https://ankiweb.net/shared/info/2055492159). \
         Cause: {0}"
    )]
    Network(String),
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
    #[error("Settings error: {0}")]
    Settings(String),
}
