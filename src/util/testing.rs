// src/util/testing.rs

use anyhow::Result;
use std::env;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{ErrorReporter, FlashcardGateway, SettingsStore};
use crate::domain::{AddNoteRequest, AnkiSettings, DomainError};

/// Shared mock gateway for testing use cases that depend on FlashcardGateway
///
/// Clones share the record of sent requests, so a test can keep one clone
/// and hand the other to the code under test.
///
/// # Examples
///
/// ```
/// use dictanki::application::FlashcardGateway;
/// use dictanki::domain::{AddNoteRequest, AnkiSettings};
/// use dictanki::util::testing::MockFlashcardGateway;
///
/// let mock = MockFlashcardGateway::builder().build();
/// let request = AddNoteRequest::new(&AnkiSettings::default(), "word", "Wort");
/// mock.add_note("http://127.0.0.1:8765", &request).unwrap();
/// assert_eq!(mock.sent_requests().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockFlashcardGateway {
    failure: Option<String>,
    sent: Arc<Mutex<Vec<(String, AddNoteRequest)>>>,
}

impl MockFlashcardGateway {
    pub fn builder() -> MockFlashcardGatewayBuilder {
        MockFlashcardGatewayBuilder::new()
    }

    /// (endpoint, request) pairs received so far, in dispatch order
    pub fn sent_requests(&self) -> Vec<(String, AddNoteRequest)> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

impl FlashcardGateway for MockFlashcardGateway {
    fn add_note(&self, endpoint: &str, request: &AddNoteRequest) -> Result<(), DomainError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push((endpoint.to_string(), request.clone()));
        }
        match &self.failure {
            Some(cause) => Err(DomainError::Network(cause.clone())),
            None => Ok(()),
        }
    }
}

/// Builder for MockFlashcardGateway
pub struct MockFlashcardGatewayBuilder {
    failure: Option<String>,
}

impl MockFlashcardGatewayBuilder {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Make every add_note call fail with a network error carrying `cause`
    pub fn with_network_failure(mut self, cause: &str) -> Self {
        self.failure = Some(cause.to_string());
        self
    }

    pub fn build(self) -> MockFlashcardGateway {
        MockFlashcardGateway {
            failure: self.failure,
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl Default for MockFlashcardGatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory SettingsStore; clones share the saved value
#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    initial: Option<AnkiSettings>,
    saved: Arc<Mutex<Option<AnkiSettings>>>,
}

impl MemorySettingsStore {
    pub fn with_settings(settings: AnkiSettings) -> Self {
        Self {
            initial: Some(settings),
            saved: Arc::new(Mutex::new(None)),
        }
    }

    /// Last value passed to save, if any
    pub fn saved(&self) -> Option<AnkiSettings> {
        self.saved.lock().ok().and_then(|saved| saved.clone())
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<AnkiSettings, DomainError> {
        Ok(self
            .saved()
            .or_else(|| self.initial.clone())
            .unwrap_or_default())
    }

    fn save(&self, settings: &AnkiSettings) -> Result<(), DomainError> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|e| DomainError::Settings(e.to_string()))?;
        *saved = Some(settings.clone());
        Ok(())
    }
}

/// ErrorReporter that remembers (title, message) pairs
#[derive(Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, title: &str, message: &str) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push((title.to_string(), message.to_string()));
        }
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "rustls", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
