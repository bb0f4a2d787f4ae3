use gloo_timers::callback::Timeout;
use js_sys::Array;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{dom, schedule::TimerChain, Site};
use crate::error::SiteError;
use crate::reveal::{
    parse_leading_int, progress_width, CountUp, RevealTrigger, COUNTER_FRAME_MS,
    PROGRESS_DELAY_MS,
};

/// Calls `on_reveal` once per target, the first time it is visible enough,
/// then stops observing that target.
fn observe_once<F>(targets: &[Element], threshold: f64, mut on_reveal: F) -> Result<(), SiteError>
where
    F: FnMut(Element) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }

    let mut triggers: Vec<(Element, RevealTrigger)> = targets
        .iter()
        .map(|target| (target.clone(), RevealTrigger::new(threshold)))
        .collect();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some((_, trigger)) = triggers.iter_mut().find(|(element, _)| *element == target)
                else {
                    continue;
                };

                if trigger.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    observer.unobserve(&target);
                    on_reveal(target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for target in targets {
        observer.observe(target);
    }

    // The observer lives as long as the page.
    callback.forget();
    Ok(())
}

pub fn init_counters(site: &Rc<Site>) -> Result<(), SiteError> {
    let logger = site.logger;
    let duration_ms = site.config.counter_duration_ms;

    observe_once(&site.elements.counters, site.config.reveal_threshold, move |counter| {
        let text = counter.text_content().unwrap_or_default();
        let Some(target) = parse_leading_int(&text) else {
            logger.debug("counter.skipped", json!({ "text": text }));
            return;
        };

        let mut count = CountUp::new(target, duration_ms);
        TimerChain::start(COUNTER_FRAME_MS, move || {
            let frame = count.tick();
            counter.set_text_content(Some(&frame.display.to_string()));
            (!frame.done).then_some(COUNTER_FRAME_MS)
        })
        .forget();
    })
}

pub fn init_progress_bars(site: &Rc<Site>) -> Result<(), SiteError> {
    let logger = site.logger;

    observe_once(&site.elements.progress_bars, site.config.reveal_threshold, move |bar| {
        let raw = bar.get_attribute("data-width");
        let Some(width) = progress_width(raw.as_deref()) else {
            logger.debug("progress_bar.skipped", json!({ "dataWidth": raw }));
            return;
        };

        Timeout::new(PROGRESS_DELAY_MS, move || dom::set_style(&bar, "width", &width)).forget();
    })
}
