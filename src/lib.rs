mod cli;
mod config;
mod controller;
mod document;
mod error;
mod markup;
mod storage;
mod theme;
#[cfg(feature = "web")]
mod web;

use std::io::Write as _;

use anyhow::Context as _;
use serde::Serialize;

pub use cli::{Args as CliArgs, Command, OutputFormat, Scheme};
pub use config::ThemeConfig;
pub use controller::{Listeners, ThemeController};
pub use document::{ThemeDocument, ToggleControl, VirtualDocument};
pub use error::{Error, Result};
pub use markup::toggle_icon;
pub use storage::{FileStore, MemoryStore, PreferenceStore};
pub use theme::Theme;
#[cfg(feature = "web")]
pub use web::{BrowserDocument, LocalStorage, install};

/// State of the simulated page after a CLI run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub theme: Theme,
    pub stored: Option<Theme>,
    pub listeners: Listeners,
    /// `None` when the command was ignored (a system change with an override saved).
    pub changed: Option<Theme>,
    pub toggle: Option<ToggleControl>,
}

pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let report = execute(&args)?;

    let mut out = std::io::stdout().lock();
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report).context("encode report")?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(&mut out, &report)?,
    }
    Ok(())
}

/// Performs one page load plus the requested event, persisting to `args.store`.
pub fn execute(args: &CliArgs) -> anyhow::Result<Report> {
    let config = match &args.config {
        Some(path) => {
            ThemeConfig::load(path).with_context(|| format!("load {}", path.display()))?
        }
        None => ThemeConfig::default(),
    };
    let store = FileStore::open(&args.store)
        .with_context(|| format!("open preference store {}", args.store.display()))?;
    let document = if args.no_toggle {
        VirtualDocument::without_toggle()
    } else {
        VirtualDocument::with_toggle()
    };

    let mut controller = ThemeController::new(config, store, document);
    let listeners = controller.start(Theme::from(args.system).is_dark());
    tracing::debug!(?listeners, "page ready");

    let changed = match args.command {
        Command::Show => None,
        Command::Toggle => {
            if !listeners.toggle {
                anyhow::bail!("page has no toggle control to click");
            }
            Some(controller.toggle().context("toggle theme")?)
        }
        Command::SystemChange { prefers } => {
            controller.system_changed(Theme::from(prefers).is_dark())
        }
    };

    Ok(Report {
        theme: controller.current_theme(),
        stored: controller.stored_preference(),
        listeners,
        changed,
        toggle: controller.document().toggle().cloned(),
    })
}

fn write_text(out: &mut impl std::io::Write, report: &Report) -> anyhow::Result<()> {
    let or_none = |t: Option<Theme>| t.map_or("none", Theme::as_str);
    writeln!(out, "theme: {}", report.theme)?;
    writeln!(out, "stored: {}", or_none(report.stored))?;
    writeln!(out, "changed: {}", or_none(report.changed))?;
    match &report.toggle {
        Some(toggle) => {
            writeln!(out, "toggle: {}", toggle.inner_html)?;
            writeln!(out, "title: {}", toggle.title)?;
        }
        None => writeln!(out, "toggle: absent")?,
    }
    Ok(())
}
