// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;
use anyhow::{anyhow, bail, Context, Result};
use application::{AnkiPlugin, PluginMetadata, SettingsStore, ToolbarPlugin};
use domain::{AddNoteRequest, SettingsUpdate};
use infrastructure::{AnkiConnectClient, TomlSettingsStore};
use ports::{ConsolePresenter, ConsoleReporter};
use tracing::{debug, info};
use crate::cli::args::{Args, Command};

type CliPlugin = AnkiPlugin<AnkiConnectClient, TomlSettingsStore, ConsoleReporter>;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting dictanki with arguments");

    let settings_path = match args.config {
        Some(path) => {
            debug!(?path, "Using provided settings path");
            path
        }
        None => find_settings_path()?,
    };
    let store = TomlSettingsStore::new(settings_path);

    match args.command {
        Command::Add { word, translation } => handle_add_command(store, &word, &translation),
        Command::Request { word, translation } => {
            handle_request_command(&store, &word, &translation)
        }
        Command::Settings {
            url,
            deck,
            model,
            allow_duplicates,
        } => handle_settings_command(
            store,
            SettingsUpdate {
                connect_url: url,
                deck_name: deck,
                model_name: model,
                allow_duplicates,
            },
        ),
        Command::Info { json } => handle_info_command(json),
    }
}

pub fn find_settings_path() -> Result<PathBuf> {
    TomlSettingsStore::default_path().context("Could not determine settings location")
}

fn load_plugin(store: TomlSettingsStore) -> Result<CliPlugin> {
    let path = store.path().to_path_buf();
    let client = AnkiConnectClient::new()?;
    AnkiPlugin::load(client, store, ConsoleReporter)
        .with_context(|| format!("Failed to load settings from {}", path.display()))
}

fn handle_add_command(store: TomlSettingsStore, word: &str, translation: &str) -> Result<()> {
    let plugin = load_plugin(store)?;
    info!(word, url = %plugin.settings().connect_url, "Adding word to Anki");

    let outcome = plugin
        .execute(word, translation)
        .join()
        .map_err(|_| anyhow!("AnkiConnect dispatch thread panicked"))?;
    plugin.shutdown().context("Failed to save settings")?;

    // The reporter has already shown the network error
    if outcome.is_err() {
        bail!("'{}' was not added to Anki", word);
    }
    println!("Added '{}' to deck '{}'", word, plugin.settings().deck_name);
    Ok(())
}

fn handle_request_command(store: &TomlSettingsStore, word: &str, translation: &str) -> Result<()> {
    let settings = store.load()?;
    let request = AddNoteRequest::new(&settings, word, translation);
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn handle_settings_command(store: TomlSettingsStore, update: SettingsUpdate) -> Result<()> {
    let mut plugin = load_plugin(store)?;
    let presenter = ConsolePresenter::new();

    if !update.is_empty() {
        let changed = plugin.edit_settings(update)?;
        if changed {
            plugin.shutdown().context("Failed to save settings")?;
            info!("Settings updated");
        } else {
            info!("Settings unchanged");
        }
    }

    print!("{}", presenter.render_settings(plugin.settings()));
    Ok(())
}

fn handle_info_command(json: bool) -> Result<()> {
    let metadata = PluginMetadata::anki();
    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        let presenter = ConsolePresenter::new();
        print!(
            "{}",
            presenter.render_metadata(&metadata, application::plugin::TOOLBAR_TEXT)
        );
    }
    Ok(())
}
