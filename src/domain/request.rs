// src/domain/request.rs
use crate::constants::ANKI_CONNECT_VERSION;
use crate::domain::AnkiSettings;
use serde::Serialize;

/// AnkiConnect `addNote` call
///
/// Serializes to the exact payload AnkiConnect expects:
///
/// ```
/// use dictanki::domain::{AddNoteRequest, AnkiSettings};
///
/// let request = AddNoteRequest::new(&AnkiSettings::default(), "Haus", "house");
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["action"], "addNote");
/// assert_eq!(json["params"]["note"]["fields"]["Front"], "Haus");
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AddNoteRequest {
    pub action: &'static str,
    pub version: u32,
    pub params: AddNoteParams,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AddNoteParams {
    pub note: NewNote,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub deck_name: String,
    pub model_name: String,
    pub fields: NoteFields,
    pub options: NoteOptions,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NoteFields {
    #[serde(rename = "Front")]
    pub front: String,
    #[serde(rename = "Back")]
    pub back: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
}

impl AddNoteRequest {
    pub const ACTION: &'static str = "addNote";

    /// Build the request for `word` (front) and `translation` (back).
    ///
    /// Both strings are passed through untouched: the translation usually
    /// carries HTML from the dictionary, which Anki renders as-is.
    pub fn new(settings: &AnkiSettings, word: &str, translation: &str) -> Self {
        Self {
            action: Self::ACTION,
            version: ANKI_CONNECT_VERSION,
            params: AddNoteParams {
                note: NewNote {
                    deck_name: settings.deck_name.clone(),
                    model_name: settings.model_name.clone(),
                    fields: NoteFields {
                        front: word.to_string(),
                        back: translation.to_string(),
                    },
                    options: NoteOptions {
                        allow_duplicate: settings.allow_duplicates,
                    },
                    tags: Vec::new(),
                },
            },
        }
    }

    pub fn word(&self) -> &str {
        &self.params.note.fields.front
    }
}
