// src/application/note_sender.rs
use crate::domain::{AddNoteRequest, AnkiSettings, DomainError};
use tracing::debug;

/// Transport that hands a new note over to the flashcard service
pub trait FlashcardGateway {
    /// Deliver the request to `endpoint`. Only transport failures are errors;
    /// the reply body is ignored.
    fn add_note(&self, endpoint: &str, request: &AddNoteRequest) -> Result<(), DomainError>;
}

pub struct NoteSender<G: FlashcardGateway> {
    gateway: G,
}

impl<G: FlashcardGateway> NoteSender<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn send(
        &self,
        settings: &AnkiSettings,
        word: &str,
        translation: &str,
    ) -> Result<(), DomainError> {
        let request = AddNoteRequest::new(settings, word, translation);
        debug!(word, deck = %settings.deck_name, "Sending note to Anki");
        self.gateway.add_note(&settings.connect_url, &request)
    }
}
