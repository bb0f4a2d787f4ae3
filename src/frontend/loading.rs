use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlElement;

use super::{dom, Site};
use crate::error::SiteError;

const FADE_DELAY_MS: u32 = 1_000;
const REMOVE_DELAY_MS: u32 = 500;
const FADE_CLASS: &str = "fade-out";

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    let Some(screen) = site.elements.loading_screen.clone() else {
        return Ok(());
    };

    // The module may start after `load` has already fired.
    if dom::ready_state(&site.document).as_deref() == Some("complete") {
        hide(screen);
    } else {
        EventListener::once(&site.window, "load", move |_| hide(screen)).forget();
    }

    Ok(())
}

fn hide(screen: HtmlElement) {
    Timeout::new(FADE_DELAY_MS, move || {
        let _ = screen.class_list().add_1(FADE_CLASS);
        Timeout::new(REMOVE_DELAY_MS, move || {
            let _ = screen.style().set_property("display", "none");
        })
        .forget();
    })
    .forget();
}
