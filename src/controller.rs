use serde::Serialize;

use crate::config::ThemeConfig;
use crate::document::ThemeDocument;
use crate::error::Result;
use crate::markup;
use crate::storage::PreferenceStore;
use crate::theme::Theme;

/// Listeners the host has to wire up after [`ThemeController::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listeners {
    pub toggle: bool,
    pub system_change: bool,
}

/// Resolves, applies and persists the page theme.
///
/// The controller owns no browser state of its own: the store and the document
/// are injected, so the same logic runs against `localStorage` and the live
/// DOM in the browser, or against a JSON file and an in-memory page natively.
pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: S,
    document: D,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore,
    D: ThemeDocument,
{
    pub fn new(config: ThemeConfig, store: S, document: D) -> Self {
        Self {
            config,
            store,
            document,
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_parts(self) -> (ThemeConfig, S, D) {
        (self.config, self.store, self.document)
    }

    /// The user's saved override, if any. An empty value or a read failure
    /// counts as "no override".
    pub fn stored_preference(&self) -> Option<Theme> {
        let key = self.config.storage_key.as_str();
        match self.store.get(key) {
            Ok(Some(value)) if value.is_empty() => None,
            Ok(Some(value)) => {
                if value != Theme::Dark.as_str() && value != Theme::Light.as_str() {
                    tracing::warn!(key, value = %value, "unrecognized stored theme; using light");
                }
                Some(Theme::from_stored(&value))
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key, error = %err, "read theme preference");
                None
            }
        }
    }

    pub fn initial_theme(&self, system_prefers_dark: bool) -> Theme {
        self.stored_preference()
            .unwrap_or_else(|| Theme::from_dark(system_prefers_dark))
    }

    /// Page-ready: applies the initial theme and reports which listeners to attach.
    pub fn start(&mut self, system_prefers_dark: bool) -> Listeners {
        let theme = self.initial_theme(system_prefers_dark);
        self.apply(theme);

        let listeners = Listeners {
            toggle: self.document.has_toggle(),
            system_change: true,
        };
        if !listeners.toggle {
            tracing::debug!(toggle_id = %self.config.toggle_id, "no toggle control on page");
        }
        listeners
    }

    pub fn apply(&mut self, theme: Theme) {
        self.document
            .set_root_class(&self.config.dark_class, theme.is_dark());
        let icon = markup::toggle_icon(theme).into_string();
        self.document.render_toggle(&icon, theme.toggle_title());
        tracing::debug!(%theme, "applied theme");
    }

    pub fn current_theme(&self) -> Theme {
        Theme::from_dark(self.document.root_has_class(&self.config.dark_class))
    }

    /// Click handler. The page is updated before the new value is persisted, so
    /// a storage failure leaves the flip visible and is reported to the caller.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current_theme().toggled();
        self.apply(next);
        self.store.set(&self.config.storage_key, next.as_str())?;
        tracing::info!(theme = %next, "user toggled theme");
        Ok(next)
    }

    /// Media-query change handler. Ignored once the user has saved a preference.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if let Some(stored) = self.stored_preference() {
            tracing::debug!(%stored, prefers_dark, "system theme change ignored");
            return None;
        }
        let theme = Theme::from_dark(prefers_dark);
        self.apply(theme);
        tracing::info!(%theme, "followed system theme change");
        Some(theme)
    }
}
