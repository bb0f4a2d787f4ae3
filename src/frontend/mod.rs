mod back_to_top;
mod clipboard;
mod contact;
mod dom;
mod filter;
mod loading;
mod navigation;
mod particles;
mod reveal;
mod schedule;
mod scroll_effects;
mod theme;
mod typewriter;

use gloo_events::EventListener;
use serde_json::json;
use std::rc::Rc;
use web_sys::{window, Document, HtmlElement, Window};

use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::error::SiteError;
use crate::logging::{LogLevel, Logger};
use dom::Elements;

/// Everything the components share: read-only after startup.
pub struct Site {
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub elements: Elements,
    pub config: SiteConfig,
    pub logger: Logger,
}

impl Site {
    fn from_page() -> Result<Self, SiteError> {
        let window = window().ok_or(SiteError::MissingWindow)?;
        let document = window.document().ok_or(SiteError::MissingDocument)?;
        let config = read_config(&document);
        let logger = Logger::new(config.log_level);

        Ok(Self {
            body: document.body(),
            elements: Elements::collect(&document),
            window,
            document,
            config,
            logger,
        })
    }
}

fn read_config(document: &Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();

    SiteConfig::from_json(&raw).unwrap_or_else(|error| {
        Logger::new(LogLevel::Warn).warn(
            "config.invalid",
            json!({ "error": error.to_string(), "fallback": "defaults" }),
        );
        SiteConfig::default()
    })
}

type Init = fn(&Rc<Site>) -> Result<(), SiteError>;

const COMPONENTS: &[(&str, Init)] = &[
    ("loading_screen", loading::init),
    ("navigation", navigation::init),
    ("theme_switcher", theme::init),
    ("typewriter", typewriter::init),
    ("particles", particles::init),
    ("counters", reveal::init_counters),
    ("progress_bars", reveal::init_progress_bars),
    ("project_filter", filter::init),
    ("back_to_top", back_to_top::init),
    ("contact_form", contact::init),
    ("scroll_animations", scroll_effects::init_animations),
    ("clipboard", clipboard::init),
    ("scroll_indicator", scroll_effects::init_scroll_indicator),
];

fn start(site: Rc<Site>) {
    let mut failed = 0;

    for (name, init) in COMPONENTS {
        if let Err(error) = init(&site) {
            failed += 1;
            site.logger.error(
                "component.init_failed",
                json!({ "component": name, "error": error.to_string() }),
            );
        }
    }

    site.logger.info(
        "site.initialized",
        json!({ "components": COMPONENTS.len(), "failed": failed }),
    );
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(document) = window().and_then(|w| w.document()) else {
        report_unavailable(SiteError::MissingDocument);
        return;
    };

    if dom::ready_state(&document).as_deref() == Some("loading") {
        EventListener::once(&document, "DOMContentLoaded", move |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    match Site::from_page() {
        Ok(site) => start(Rc::new(site)),
        Err(error) => report_unavailable(error),
    }
}

fn report_unavailable(error: SiteError) {
    Logger::new(LogLevel::Error).error("site.unavailable", json!({ "error": error.to_string() }));
}
