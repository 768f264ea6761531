// src/ports/console.rs
use crate::application::{ErrorReporter, PluginMetadata};
use crate::domain::AnkiSettings;
use std::io::Write;

/// Terminal stand-in for the host's error dialog
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ErrorReporter for ConsoleReporter {
    fn report(&self, title: &str, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}: {}", title, message);
    }
}

#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_settings(&self, settings: &AnkiSettings) -> String {
        format!(
            "connect_url      = {}\n\
             deck_name        = {}\n\
             model_name       = {}\n\
             allow_duplicates = {}\n",
            settings.connect_url, settings.deck_name, settings.model_name, settings.allow_duplicates
        )
    }

    pub fn render_metadata(&self, metadata: &PluginMetadata, toolbar_text: &str) -> String {
        let mut out = format!(
            "{} {} ({})\n{}\n",
            metadata.name, metadata.version, metadata.id, metadata.description
        );
        if !metadata.authors.is_empty() {
            out.push_str(&format!("Authors: {}\n", metadata.authors.join(", ")));
        }
        out.push_str(&format!("Features: {}\n", metadata.features.join(", ")));
        out.push_str(&format!("Toolbar: {}\n", toolbar_text));
        out
    }
}
