use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{dom, Site};
use crate::contact::{
    button_markup, validate, Field, FieldKind, SubmitEffect, SubmitFlow, IDLE_ICON,
    INVALID_CLASS, REARM_DELAY_MS, SENDING_CLASS, SEND_DELAY_MS, SENT_ICON,
};
use crate::error::SiteError;

const REQUIRED_FIELDS: &str = "input[required], textarea[required]";

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    let Some(form) = site.elements.contact_form.clone() else {
        return Ok(());
    };

    let flow = Rc::new(RefCell::new(SubmitFlow::default()));
    let site = Rc::clone(site);
    let target = form.clone();

    EventListener::new(&target, "submit", move |event| {
        event.prevent_default();
        handle_submit(&site, &form, &flow);
    })
    .forget();

    Ok(())
}

fn read_field(element: &Element) -> Option<Field> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(Field::new(
            input.id(),
            FieldKind::from_input_type(&input.type_()),
            input.value(),
        ));
    }

    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| Field::new(area.id(), FieldKind::Text, area.value()))
}

fn handle_submit(site: &Rc<Site>, form: &HtmlFormElement, flow: &Rc<RefCell<SubmitFlow>>) {
    let (elements, fields): (Vec<Element>, Vec<Field>) = dom::query_all_within(form, REQUIRED_FIELDS)
        .into_iter()
        .filter_map(|element| read_field(&element).map(|field| (element, field)))
        .unzip();

    let validation = validate(&fields);
    for (element, (_, valid)) in elements.iter().zip(&validation.verdicts) {
        dom::set_class(element, INVALID_CLASS, !*valid);
    }

    match flow.borrow_mut().submit(&validation) {
        SubmitEffect::StartSending => {}
        SubmitEffect::Rejected => {
            site.logger.debug(
                "contact.rejected",
                json!({ "invalid": validation.invalid_ids().collect::<Vec<_>>() }),
            );
            return;
        }
        _ => return,
    }

    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|button| button.dyn_into::<HtmlButtonElement>().ok());
    let loader = button
        .as_ref()
        .and_then(|button| button.query_selector(".btn-loader").ok().flatten());

    if let Some(button) = button.as_ref() {
        dom::set_class(button, SENDING_CLASS, true);
        button.set_disabled(true);
    }
    if let Some(loader) = loader.as_ref() {
        dom::set_style(loader, "display", "inline-block");
    }

    let site = Rc::clone(site);
    let form = form.clone();
    let flow = Rc::clone(flow);

    // No transport: the delay stands in for a network round trip.
    Timeout::new(SEND_DELAY_MS, move || {
        if flow.borrow_mut().send_finished() != SubmitEffect::Completed {
            return;
        }

        if let Some(loader) = loader.as_ref() {
            dom::set_style(loader, "display", "none");
        }
        if let Some(button) = button.as_ref() {
            dom::set_class(button, SENDING_CLASS, false);
            button.set_inner_html(&button_markup(SENT_ICON, &site.config.submit_sent_label));
        }
        form.reset();
        site.logger.info("contact.sent", json!({ "simulated": true }));

        Timeout::new(REARM_DELAY_MS, move || {
            if flow.borrow_mut().rearm() != SubmitEffect::Rearmed {
                return;
            }

            if let Some(button) = button.as_ref() {
                button.set_disabled(false);
                button.set_inner_html(&button_markup(IDLE_ICON, &site.config.submit_idle_label));
            }
        })
        .forget();
    })
    .forget();
}
