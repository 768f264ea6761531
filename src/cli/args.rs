// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to settings file (default: <config dir>/qstardict/anki.toml)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (add, settings, request, or info)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a word and its translation to Anki
    Add {
        /// Word for the front of the card
        #[arg(value_name = "WORD")]
        word: String,

        /// Translation for the back of the card
        #[arg(value_name = "TRANSLATION")]
        translation: String,
    },

    /// Print the AnkiConnect request `add` would send, without sending it
    Request {
        #[arg(value_name = "WORD")]
        word: String,

        #[arg(value_name = "TRANSLATION")]
        translation: String,
    },

    /// Show settings, or change them when any option is given
    Settings {
        /// AnkiConnect URL
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Deck receiving new notes
        #[arg(long, value_name = "DECK")]
        deck: Option<String>,

        /// Note type with Front and Back fields
        #[arg(long, value_name = "MODEL")]
        model: Option<String>,

        /// Let Anki add notes whose front already exists
        #[arg(long, value_name = "BOOL")]
        allow_duplicates: Option<bool>,
    },

    /// Show plugin metadata
    Info {
        /// Output metadata as JSON
        #[arg(long)]
        json: bool,
    },
}
