use gloo_events::EventListener;
use rand::thread_rng;
use serde_json::json;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

use super::{
    dom,
    schedule::{Debouncer, FrameLoop},
    Site,
};
use crate::error::SiteError;
use crate::particles::{Bounds, Particle, ParticleField};

const RESIZE_DEBOUNCE_MS: u32 = 250;

fn current_bounds() -> Bounds {
    let (width, height) = window()
        .map(|window| dom::viewport_size(&window))
        .unwrap_or((1280.0, 720.0));
    Bounds::new(width, height)
}

#[derive(Properties, PartialEq)]
pub struct ParticleLayerProps {
    pub count: usize,
}

#[function_component(ParticleLayer)]
fn particle_layer(props: &ParticleLayerProps) -> Html {
    let count = props.count;
    let field = use_mut_ref(|| ParticleField::create(count, current_bounds(), &mut thread_rng()));
    let redraw = use_force_update();

    {
        let field = field.clone();
        let redraw = redraw.clone();

        use_effect_with((), move |_| {
            let frame_loop = {
                let field = Rc::clone(&field);
                let redraw = redraw.clone();
                FrameLoop::start(move |_timestamp| {
                    field.borrow_mut().step();
                    redraw.force_update();
                })
            };

            // Resizing starts a fresh field; positions do not carry over.
            let resize_listener = window().map(|window| {
                let mut debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS, move || {
                    field.borrow_mut().resize(current_bounds(), &mut thread_rng());
                    redraw.force_update();
                });
                EventListener::new(&window, "resize", move |_| debouncer.call())
            });

            move || {
                drop(frame_loop);
                drop(resize_listener);
            }
        });
    }

    let nodes: Vec<Html> = field
        .borrow()
        .particles()
        .iter()
        .enumerate()
        .map(|(index, particle)| particle_node(index, particle))
        .collect();

    html! { <>{ for nodes }</> }
}

fn particle_node(index: usize, particle: &Particle) -> Html {
    html! {
        <div key={index} class="particle" style={particle.style()}></div>
    }
}

pub fn init(site: &Rc<Site>) -> Result<(), SiteError> {
    let Some(root) = site.elements.particles_container.clone() else {
        return Ok(());
    };

    let count = site.config.particle_count;
    yew::Renderer::<ParticleLayer>::with_root_and_props(root, ParticleLayerProps { count }).render();
    site.logger.debug("particles.started", json!({ "count": count }));

    Ok(())
}
