use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::rc::Rc;
use web_sys::Element;

use super::{dom, Site};
use crate::error::SiteError;
use crate::filter::{ProjectFilter, HIDE_CLASS, HIDE_DELAY_MS};
use crate::navigation::ACTIVE_CLASS;

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    for button in &site.elements.filter_buttons {
        let site = Rc::clone(site);
        let clicked = button.clone();

        EventListener::new(button, "click", move |_| {
            let filter = ProjectFilter::parse(clicked.get_attribute("data-filter").as_deref());
            let shown = filter_projects(&site.elements.project_items, &filter);
            update_active_filter(&site.elements.filter_buttons, &clicked);

            site.logger.debug(
                "projects.filtered",
                json!({ "filter": format!("{filter:?}"), "shown": shown }),
            );
        })
        .forget();
    }

    Ok(())
}

fn filter_projects(items: &[Element], filter: &ProjectFilter) -> usize {
    let mut shown = 0;

    for item in items {
        if filter.matches_class_attr(&item.class_name()) {
            shown += 1;
            dom::set_class(item, HIDE_CLASS, false);
            dom::set_style(item, "display", "block");
        } else {
            dom::set_class(item, HIDE_CLASS, true);
            let item = item.clone();
            // Leaves time for the CSS fade; a later filter may have shown it again.
            Timeout::new(HIDE_DELAY_MS, move || {
                if dom::has_class(&item, HIDE_CLASS) {
                    dom::set_style(&item, "display", "none");
                }
            })
            .forget();
        }
    }

    shown
}

fn update_active_filter(buttons: &[Element], active: &Element) {
    for button in buttons {
        dom::set_class(button, ACTIVE_CLASS, false);
    }
    dom::set_class(active, ACTIVE_CLASS, true);
}
