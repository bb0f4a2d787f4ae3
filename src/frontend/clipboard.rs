use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlDocument, HtmlTextAreaElement, Window};

use super::{dom, Site};
use crate::error::SiteError;
use crate::logging::Logger;

const COPYABLE: &str = "[data-copy=\"email\"], [data-copy=\"phone\"]";
const COPIED_TEXT: &str = "Copied!";
const COPIED_COLOR: &str = "#10b981";
const MESSAGE_MS: u32 = 2_000;

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    for element in dom::query_all(&site.document, COPYABLE) {
        dom::set_style(&element, "cursor", "pointer");
        element.set_attribute("title", "Click to copy")?;

        let site = Rc::clone(site);
        let target = element.clone();
        EventListener::new(&target, "click", move |_| {
            let text = element.text_content().unwrap_or_default().trim().to_string();
            // A second click while the confirmation shows would copy it.
            if text == COPIED_TEXT {
                return;
            }

            copy_text(&site, element.clone(), text);
        })
        .forget();
    }

    Ok(())
}

fn copy_text(site: &Site, element: Element, text: String) {
    match clipboard_write(&site.window, &text) {
        Some(promise) => {
            let logger = site.logger;
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => show_copy_message(element),
                    Err(error) => log_copy_failure(logger, SiteError::from(error)),
                }
            });
        }
        None => match copy_with_textarea(&site.document, &text) {
            Ok(()) => show_copy_message(element),
            Err(error) => log_copy_failure(site.logger, error),
        },
    }
}

/// `navigator.clipboard.writeText(text)`, when the async clipboard exists.
fn clipboard_write(window: &Window, text: &str) -> Option<Promise> {
    let navigator: JsValue = window.navigator().into();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;

    write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .ok()?
        .dyn_into::<Promise>()
        .ok()
}

fn copy_with_textarea(document: &Document, text: &str) -> Result<(), SiteError> {
    let body = document.body().ok_or(SiteError::MissingElement("body"))?;
    let area = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| SiteError::Dom("created element is not a textarea".to_string()))?;

    area.set_value(text);
    body.append_child(&area)?;
    area.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .map(|document| document.exec_command("copy"))
        .transpose()?;
    body.remove_child(&area)?;

    match copied {
        Some(true) => Ok(()),
        _ => Err(SiteError::Dom("copy command was rejected".to_string())),
    }
}

fn show_copy_message(element: Element) {
    let original = element.text_content();
    element.set_text_content(Some(COPIED_TEXT));
    dom::set_style(&element, "color", COPIED_COLOR);

    Timeout::new(MESSAGE_MS, move || {
        element.set_text_content(original.as_deref());
        dom::set_style(&element, "color", "");
    })
    .forget();
}

fn log_copy_failure(logger: Logger, error: SiteError) {
    logger.warn("clipboard.copy_failed", json!({ "error": error.to_string() }));
}
