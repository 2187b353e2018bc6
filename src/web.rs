//! Browser host: wires the controller to `localStorage`, `document.body`, the
//! toggle element and the color-scheme media query.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MediaQueryListEvent, Storage};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::document::ThemeDocument;
use crate::error::{Error, Result};
use crate::storage::PreferenceStore;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn from_window(window: &web_sys::Window) -> Result<Self> {
        let storage = window
            .local_storage()
            .map_err(|e| Error::StorageUnavailable(format!("{e:?}")))?
            .ok_or_else(|| Error::StorageUnavailable("window.localStorage is null".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| Error::StorageUnavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| Error::StorageUnavailable(format!("{e:?}")))
    }
}

pub struct BrowserDocument {
    body: HtmlElement,
    toggle: Option<Element>,
}

impl BrowserDocument {
    pub fn locate(document: &Document, toggle_id: &str) -> Result<Self> {
        let body = document.body().ok_or(Error::MissingBody)?;
        let toggle = document.get_element_by_id(toggle_id);
        Ok(Self { body, toggle })
    }

    pub fn toggle_element(&self) -> Option<&Element> {
        self.toggle.as_ref()
    }
}

impl ThemeDocument for BrowserDocument {
    fn root_has_class(&self, class: &str) -> bool {
        self.body.class_list().contains(class)
    }

    fn set_root_class(&mut self, class: &str, enabled: bool) {
        let classes = self.body.class_list();
        let res = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(err) = res {
            tracing::warn!(class, error = ?err, "update body class");
        }
    }

    fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    fn render_toggle(&mut self, icon_html: &str, title: &str) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        toggle.set_inner_html(icon_html);
        if let Err(err) = toggle.set_attribute("title", title) {
            tracing::warn!(error = ?err, "set toggle title");
        }
    }
}

type BrowserController = ThemeController<LocalStorage, BrowserDocument>;

thread_local! {
    static INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Installs the toggle with the default page names.
#[wasm_bindgen(js_name = install)]
pub fn install_default() -> Result<(), JsValue> {
    install(ThemeConfig::default())
}

/// Installs with a JSON [`ThemeConfig`] for pages that use other ids or keys.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = ThemeConfig::from_json(config_json).map_err(to_js)?;
    install(config)
}

/// Runs setup now if the DOM is parsed, otherwise on `DOMContentLoaded`.
///
/// Only the first call installs a controller; later calls fail, since two
/// controllers on one toggle would each flip the theme on a single click.
pub fn install(config: ThemeConfig) -> Result<(), JsValue> {
    if INSTALLED.with(|installed| installed.replace(true)) {
        return Err(JsValue::from_str("theme toggle is already installed"));
    }
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    if document.ready_state() != "loading" {
        return on_ready(&window, &document, config);
    }

    let on_loaded = Closure::once(move || {
        let Some(document) = window.document() else {
            return;
        };
        if let Err(err) = on_ready(&window, &document, config) {
            tracing::warn!(error = ?err, "theme toggle setup failed");
        }
    });
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_loaded.as_ref().unchecked_ref(),
    )?;
    on_loaded.forget();
    Ok(())
}

fn on_ready(
    window: &web_sys::Window,
    document: &Document,
    config: ThemeConfig,
) -> Result<(), JsValue> {
    let media = window
        .match_media(&config.media_query)?
        .ok_or_else(|| JsValue::from_str("matchMedia is not supported"))?;
    let store = LocalStorage::from_window(window).map_err(to_js)?;
    let page = BrowserDocument::locate(document, &config.toggle_id).map_err(to_js)?;
    let toggle_el = page.toggle_element().cloned();

    let controller: Rc<RefCell<BrowserController>> =
        Rc::new(RefCell::new(ThemeController::new(config, store, page)));
    let listeners = controller.borrow_mut().start(media.matches());

    if let Some(el) = toggle_el {
        let controller = Rc::clone(&controller);
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Err(err) = controller.borrow_mut().toggle() {
                tracing::warn!(error = %err, "persist theme preference");
            }
        });
        el.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    if listeners.system_change {
        let controller = Rc::clone(&controller);
        let on_change =
            Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                controller.borrow_mut().system_changed(event.matches());
            });
        media.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
    }

    Ok(())
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
