use std::collections::BTreeSet;

use serde::Serialize;

/// The parts of a page the controller touches: a class on the page root and
/// an optional toggle control.
pub trait ThemeDocument {
    fn root_has_class(&self, class: &str) -> bool;
    fn set_root_class(&mut self, class: &str, enabled: bool);
    fn has_toggle(&self) -> bool;
    /// No-op when the page has no toggle control.
    fn render_toggle(&mut self, icon_html: &str, title: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToggleControl {
    pub inner_html: String,
    pub title: String,
}

/// In-memory page used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct VirtualDocument {
    root_classes: BTreeSet<String>,
    toggle: Option<ToggleControl>,
}

impl VirtualDocument {
    pub fn with_toggle() -> Self {
        Self {
            root_classes: BTreeSet::new(),
            toggle: Some(ToggleControl::default()),
        }
    }

    pub fn without_toggle() -> Self {
        Self::default()
    }

    pub fn toggle(&self) -> Option<&ToggleControl> {
        self.toggle.as_ref()
    }

    pub fn root_classes(&self) -> impl Iterator<Item = &str> {
        self.root_classes.iter().map(String::as_str)
    }
}

impl ThemeDocument for VirtualDocument {
    fn root_has_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
    }

    fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    fn render_toggle(&mut self, icon_html: &str, title: &str) {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.inner_html = icon_html.to_string();
            toggle.title = title.to_string();
        }
    }
}
