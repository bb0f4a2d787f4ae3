use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions, Window,
};

/// Every element the components look up, resolved once at startup.
pub struct Elements {
    pub loading_screen: Option<HtmlElement>,
    pub navbar: Option<Element>,
    pub nav_links: Vec<Element>,
    pub theme_switcher: Option<Element>,
    pub back_to_top: Option<Element>,
    pub typed_text: Option<Element>,
    pub counters: Vec<Element>,
    pub progress_bars: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub filter_buttons: Vec<Element>,
    pub project_items: Vec<Element>,
    pub particles_container: Option<Element>,
    pub scroll_indicator: Option<Element>,
}

impl Elements {
    pub fn collect(document: &Document) -> Self {
        Self {
            loading_screen: by_id(document, "loading-screen"),
            navbar: query(document, ".navbar"),
            nav_links: query_all(document, ".nav-link"),
            theme_switcher: query(document, ".theme-switcher"),
            back_to_top: by_id(document, "backToTop"),
            typed_text: query(document, ".typed-text"),
            counters: query_all(document, ".counter"),
            progress_bars: query_all(document, ".progress-bar"),
            contact_form: by_id(document, "contactForm"),
            filter_buttons: query_all(document, ".filter-btn"),
            project_items: query_all(document, ".project-item"),
            particles_container: query(document, ".particles-container"),
            scroll_indicator: query(document, ".scroll-indicator"),
        }
    }
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn set_class(element: &Element, class: &str, enabled: bool) {
    let _ = element.class_list().toggle_with_force(class, enabled);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn media_matches(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn ready_state(document: &Document) -> Option<String> {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string())
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn smooth_scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
