use gloo_events::EventListener;
use std::rc::Rc;

use super::{dom, schedule, Site};
use crate::error::SiteError;
use crate::navigation::{back_to_top_visible, SHOW_CLASS};

const SCROLL_THROTTLE_MS: u32 = 100;

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    let Some(button) = site.elements.back_to_top.clone() else {
        return Ok(());
    };

    let window = site.window.clone();
    EventListener::new(&button, "click", move |_| dom::smooth_scroll_to(&window, 0.0)).forget();

    let window = site.window.clone();
    schedule::throttled_listener(&site.window, "scroll", SCROLL_THROTTLE_MS, move || {
        dom::set_class(&button, SHOW_CLASS, back_to_top_visible(dom::scroll_y(&window)));
    })
    .forget();

    Ok(())
}
