use gloo_events::EventListener;
use js_sys::{Function, Object, Reflect};
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

use super::{dom, schedule, Site};
use crate::error::SiteError;
use crate::navigation::parallax_transform;

const PARALLAX_THROTTLE_MS: u32 = 10;
const PARALLAX_SELECTOR: &str = ".hero-background";
const AOS_OFFSET: f64 = 100.0;

pub fn init_animations(site: &Rc<Site>) -> Result<(), SiteError> {
    let aos = init_aos(site)?;
    site.logger.debug("scroll_animations.aos", json!({ "initialized": aos }));

    let handler_site = Rc::clone(site);
    schedule::throttled_listener(&site.window, "scroll", PARALLAX_THROTTLE_MS, move || {
        let transform = parallax_transform(dom::scroll_y(&handler_site.window));
        for element in dom::query_all(&handler_site.document, PARALLAX_SELECTOR) {
            dom::set_style(&element, "transform", &transform);
        }
    })
    .forget();

    Ok(())
}

/// `AOS.init({...})` when the animate-on-scroll library is on the page.
fn init_aos(site: &Site) -> Result<bool, SiteError> {
    let aos = Reflect::get(&site.window, &JsValue::from_str("AOS"))?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(false);
    }

    let Ok(init) = Reflect::get(&aos, &JsValue::from_str("init"))?.dyn_into::<Function>() else {
        return Ok(false);
    };

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(f64::from(site.config.animation_duration_ms)),
    )?;
    Reflect::set(&options, &JsValue::from_str("easing"), &JsValue::from_str("ease-in-out"))?;
    Reflect::set(&options, &JsValue::from_str("once"), &JsValue::TRUE)?;
    Reflect::set(&options, &JsValue::from_str("offset"), &JsValue::from_f64(AOS_OFFSET))?;

    init.call1(&aos, &options)?;
    Ok(true)
}

pub fn init_scroll_indicator(site: &Rc<Site>) -> Result<(), SiteError> {
    let Some(indicator) = site.elements.scroll_indicator.clone() else {
        return Ok(());
    };

    let document = site.document.clone();
    EventListener::new(&indicator, "click", move |_| {
        if let Some(about) = document.get_element_by_id("about") {
            dom::smooth_scroll_into_view(&about);
        }
    })
    .forget();

    Ok(())
}
