// src/constants.rs
//
// Values shared between the request builder, the HTTP gateway and the settings store.

/// Endpoint AnkiConnect listens on out of the box.
pub const DEFAULT_CONNECT_URL: &str = "http://127.0.0.1:8765";

/// Deck every fresh Anki profile has.
pub const DEFAULT_DECK_NAME: &str = "Default";

/// Stock note type with `Front` and `Back` fields.
pub const DEFAULT_MODEL_NAME: &str = "Basic";

/// AnkiConnect API version the `addNote` payload is written against.
///
/// Used in: `domain/request.rs`
pub const ANKI_CONNECT_VERSION: u32 = 6;

/// Upper bound for a single AnkiConnect round trip.
///
/// Anki answers `addNote` from its main thread, so a busy UI can stall the reply
/// for a few seconds. Anything beyond this is reported as a network error.
///
/// Used in: `infrastructure/anki_connect.rs`
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Directory below the platform config dir shared with the dictionary host.
pub const SETTINGS_DIR_NAME: &str = "qstardict";

/// File name of the plugin settings inside [`SETTINGS_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "anki.toml";
