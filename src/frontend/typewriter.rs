use serde_json::json;
use std::rc::Rc;
use yew::prelude::*;

use super::{schedule::TimerChain, Site};
use crate::error::SiteError;
use crate::typewriter::{Timing, Typewriter};

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub texts: Vec<String>,
    pub timing: Timing,
    pub start_delay_ms: u32,
}

#[function_component(TypedText)]
fn typed_text(props: &TypedTextProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        let texts = props.texts.clone();
        let timing = props.timing;
        let start_delay_ms = props.start_delay_ms;

        use_effect_with((), move |_| {
            let chain = Typewriter::new(texts, timing).map(|mut machine| {
                TimerChain::start(start_delay_ms, move || {
                    let tick = machine.tick();
                    text.set(tick.text);
                    Some(tick.delay_ms)
                })
            });

            move || drop(chain)
        });
    }

    html! { <>{ (*text).clone() }</> }
}

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    let Some(root) = site.elements.typed_text.clone() else {
        return Ok(());
    };

    let config = &site.config;
    if config.typed_texts.is_empty() {
        site.logger.debug("typewriter.disabled", json!({ "reason": "no texts" }));
        return Ok(());
    }

    let props = TypedTextProps {
        texts: config.typed_texts.clone(),
        timing: Timing::from_speed(
            config.typewriter_speed_ms,
            config.typewriter_hold_ms,
            config.typewriter_gap_ms,
        ),
        start_delay_ms: config.typewriter_delay_ms,
    };

    yew::Renderer::<TypedText>::with_root_and_props(root, props).render();
    Ok(())
}
