use gloo_events::EventListener;
use js_sys::{Array, Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use super::{dom, schedule, Site};
use crate::error::SiteError;
use crate::navigation::{
    active_section, anchor_scroll_target, link_targets_section, navbar_is_scrolled,
    SectionPosition, ACTIVE_CLASS, SCROLLED_CLASS, SHOW_CLASS,
};

const SCROLL_THROTTLE_MS: u32 = 10;

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    handle_scroll(site);
    setup_smooth_scroll(site);
    setup_link_clicks(site);

    let handler_site = Rc::clone(site);
    schedule::throttled_listener(&site.window, "scroll", SCROLL_THROTTLE_MS, move || {
        handle_scroll(&handler_site)
    })
    .forget();

    Ok(())
}

fn handle_scroll(site: &Site) {
    let scroll_y = dom::scroll_y(&site.window);

    if let Some(navbar) = site.elements.navbar.as_ref() {
        dom::set_class(navbar, SCROLLED_CLASS, navbar_is_scrolled(scroll_y));
    }

    update_active_links(site, scroll_y);
}

fn section_positions(site: &Site) -> Vec<SectionPosition> {
    dom::query_all(&site.document, "section[id]")
        .into_iter()
        .filter_map(|section| {
            let top = section.dyn_ref::<HtmlElement>()?.offset_top();
            Some(SectionPosition {
                id: section.id(),
                top: f64::from(top),
            })
        })
        .collect()
}

fn update_active_links(site: &Site, scroll_y: f64) {
    let sections = section_positions(site);
    let current = active_section(scroll_y, &sections);

    for link in &site.elements.nav_links {
        let href = link.get_attribute("href");
        dom::set_class(link, ACTIVE_CLASS, link_targets_section(href.as_deref(), current));
    }
}

fn setup_smooth_scroll(site: &Rc<Site>) {
    for anchor in dom::query_all(&site.document, "a[href^=\"#\"]") {
        let site = Rc::clone(site);
        let href = anchor.get_attribute("href").unwrap_or_default();

        EventListener::new(&anchor, "click", move |event| {
            event.prevent_default();

            // A bare "#" is not a valid selector; the query just fails.
            let target = site
                .document
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok());

            if let Some(target) = target {
                let top = anchor_scroll_target(f64::from(target.offset_top()), site.config.scroll_offset);
                dom::smooth_scroll_to(&site.window, top);
            }
        })
        .forget();
    }
}

fn setup_link_clicks(site: &Rc<Site>) {
    for link in &site.elements.nav_links {
        let site = Rc::clone(site);
        let clicked = link.clone();

        EventListener::new(link, "click", move |_| {
            for other in &site.elements.nav_links {
                dom::set_class(other, ACTIVE_CLASS, false);
            }
            dom::set_class(&clicked, ACTIVE_CLASS, true);

            collapse_mobile_menu(&site);
        })
        .forget();
    }
}

fn collapse_mobile_menu(site: &Site) {
    let Some(collapse) = dom::query(&site.document, ".navbar-collapse") else {
        return;
    };
    if !dom::has_class(&collapse, SHOW_CLASS) {
        return;
    }

    if bootstrap_collapse_hide(site, &collapse).is_err() {
        site.logger.debug(
            "navigation.collapse_fallback",
            serde_json::json!({ "reason": "bootstrap unavailable" }),
        );
        dom::set_class(&collapse, SHOW_CLASS, false);
    }
}

/// `new bootstrap.Collapse(element).hide()`, when Bootstrap is on the page.
fn bootstrap_collapse_hide(site: &Site, collapse: &Element) -> Result<(), JsValue> {
    let bootstrap = Reflect::get(&site.window, &JsValue::from_str("bootstrap"))?;
    let constructor = Reflect::get(&bootstrap, &JsValue::from_str("Collapse"))?
        .dyn_into::<Function>()?;

    let instance = Reflect::construct(&constructor, &Array::of1(collapse))?;
    let hide = Reflect::get(&instance, &JsValue::from_str("hide"))?.dyn_into::<Function>()?;
    hide.call0(&instance)?;

    Ok(())
}
