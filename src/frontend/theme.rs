use gloo_events::EventListener;
use js_sys::{Function, Reflect};
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, KeyboardEvent, Storage, Window};

use super::{dom, Site};
use crate::error::SiteError;
use crate::theme::{Theme, ThemeStore, ThemeSwitcher, DARK_CLASS, HIGH_CONTRAST_CLASS, THEME_KEY};

/// Persists the theme in `localStorage`; silently does nothing when storage
/// is blocked.
pub struct LocalThemeStore {
    storage: Option<Storage>,
}

impl LocalThemeStore {
    fn new(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        let value = self.storage.as_ref()?.get_item(THEME_KEY).ok().flatten()?;
        Theme::from_str(&value)
    }

    fn save(&mut self, theme: Theme) {
        if let Some(storage) = self.storage.as_ref() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
    }
}

fn system_prefers_dark(window: &Window) -> bool {
    dom::media_matches(window, "(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion(window: &Window) -> bool {
    dom::media_matches(window, "(prefers-reduced-motion: reduce)")
}

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    let switcher = ThemeSwitcher::new(
        LocalThemeStore::new(&site.window),
        system_prefers_dark(&site.window),
    );
    apply_theme(site.body.as_ref(), site.elements.theme_switcher.as_ref(), switcher.theme());
    site.logger.debug("theme.resolved", json!({ "theme": switcher.theme().as_str() }));

    if let Some(button) = site.elements.theme_switcher.clone() {
        let switcher = Rc::new(RefCell::new(switcher));
        let site = Rc::clone(site);

        EventListener::new(&button, "click", move |_| {
            let next = switcher.borrow_mut().toggle();
            apply_theme_with_transition(&site, next);
        })
        .forget();
    }

    setup_high_contrast(site);
    Ok(())
}

fn apply_theme(body: Option<&HtmlElement>, button: Option<&web_sys::Element>, theme: Theme) {
    if let Some(body) = body {
        dom::set_class(body, DARK_CLASS, theme.is_dark());
    }

    if let Some(button) = button {
        button.set_inner_html(&theme.icon_markup());
        let _ = button.set_attribute("aria-label", &theme.toggle_label());
        let _ = button.set_attribute("aria-pressed", &theme.is_dark().to_string());
    }
}

fn apply_theme_with_transition(site: &Rc<Site>, theme: Theme) {
    if prefers_reduced_motion(&site.window) || !start_view_transition(site, theme) {
        apply_theme(site.body.as_ref(), site.elements.theme_switcher.as_ref(), theme);
    }
}

/// Runs the class swap inside `document.startViewTransition` where the
/// browser has it. Returns `false` when the caller has to apply the theme.
fn start_view_transition(site: &Rc<Site>, theme: Theme) -> bool {
    let document: &Document = &site.document;
    let document_js: &JsValue = document.as_ref();

    let Ok(start) = Reflect::get(document_js, &JsValue::from_str("startViewTransition")) else {
        return false;
    };
    let Some(start) = start.dyn_ref::<Function>() else {
        return false;
    };

    let callback_site = Rc::clone(site);
    let callback = Closure::once_into_js(move || {
        apply_theme(
            callback_site.body.as_ref(),
            callback_site.elements.theme_switcher.as_ref(),
            theme,
        );
    });

    start.call1(document_js, &callback).is_ok()
}

fn setup_high_contrast(site: &Rc<Site>) {
    let body = site.body.clone();

    EventListener::new(&site.window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };

        if event.ctrl_key() && event.key().eq_ignore_ascii_case("h") {
            if let Some(body) = body.as_ref() {
                let _ = body.class_list().toggle(HIGH_CONTRAST_CLASS);
            }
        }
    })
    .forget();
}
