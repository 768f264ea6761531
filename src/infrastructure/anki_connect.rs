// src/infrastructure/anki_connect.rs
use crate::application::FlashcardGateway;
use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::domain::{AddNoteRequest, DomainError};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport for AnkiConnect's JSON API
#[derive(Debug, Clone)]
pub struct AnkiConnectClient {
    client: Client,
}

impl AnkiConnectClient {
    pub fn new() -> Result<Self, DomainError> {
        let client = Client::builder()
            .user_agent(concat!("dictanki/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| DomainError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl FlashcardGateway for AnkiConnectClient {
    #[instrument(level = "debug", skip(self, request), fields(word = request.word()))]
    fn add_note(&self, endpoint: &str, request: &AddNoteRequest) -> Result<(), DomainError> {
        let response = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| DomainError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Network(format!(
                "AnkiConnect returned HTTP {}",
                status
            )));
        }

        debug!(%status, "AnkiConnect accepted request");
        Ok(())
    }
}
