use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scheme {
    Dark,
    Light,
}

impl From<Scheme> for Theme {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Dark => Theme::Dark,
            Scheme::Light => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One `key: value` line per field.
    Text,
    /// A single JSON object.
    Json,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Load the page and print the resolved theme.
    Show,
    /// Load the page, then click the toggle control.
    Toggle,
    /// Load the page, then report a system color-scheme change.
    SystemChange {
        /// The color scheme the system switched to.
        #[arg(long, value_enum)]
        prefers: Scheme,
    },
}

/// Simulates a page load of the theme toggle against a preference file.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// JSON file standing in for the browser's localStorage.
    #[arg(long, default_value = "theme-preferences.json")]
    pub store: PathBuf,

    /// Optional JSON file overriding the storage key, dark class, toggle id or media query.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// System color-scheme preference at page load.
    #[arg(long, value_enum, default_value = "light")]
    pub system: Scheme,

    /// Simulate a page whose template has no toggle control.
    #[arg(long)]
    pub no_toggle: bool,

    /// Output format: `text` or `json`.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}
