use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use std::{cell::RefCell, rc::Rc};
use web_sys::EventTarget;

use crate::navigation::Throttle;

/// A chain of timeouts where each tick picks the delay before the next one,
/// or `None` to stop. Dropping the chain cancels the pending tick.
pub struct TimerChain {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl TimerChain {
    pub fn start<F>(initial_delay_ms: u32, tick: F) -> Self
    where
        F: FnMut() -> Option<u32> + 'static,
    {
        let pending = Rc::new(RefCell::new(None));
        arm_timeout(Rc::clone(&pending), Rc::new(RefCell::new(tick)), initial_delay_ms);
        Self { pending }
    }

    /// Lets the chain run until its tick returns `None`.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for TimerChain {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn arm_timeout<F>(pending: Rc<RefCell<Option<Timeout>>>, tick: Rc<RefCell<F>>, delay_ms: u32)
where
    F: FnMut() -> Option<u32> + 'static,
{
    let slot = Rc::clone(&pending);
    let timeout = Timeout::new(delay_ms, move || {
        let next = {
            let mut tick = tick.borrow_mut();
            (*tick)()
        };

        match next {
            Some(delay_ms) => arm_timeout(slot, tick, delay_ms),
            None => {
                slot.borrow_mut().take();
            }
        }
    });
    *pending.borrow_mut() = Some(timeout);
}

/// Runs `frame` once per animation frame until dropped.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start<F>(frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let pending = Rc::new(RefCell::new(None));
        arm_frame(Rc::clone(&pending), Rc::new(RefCell::new(frame)));
        Self { pending }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn arm_frame<F>(pending: Rc<RefCell<Option<AnimationFrame>>>, frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) + 'static,
{
    let slot = Rc::clone(&pending);
    let handle = request_animation_frame(move |timestamp| {
        {
            let mut frame = frame.borrow_mut();
            (*frame)(timestamp);
        }
        arm_frame(slot, frame);
    });
    *pending.borrow_mut() = Some(handle);
}

/// Trailing-edge debounce: `call` restarts the wait, only the last call runs.
pub struct Debouncer {
    wait_ms: u32,
    action: Rc<RefCell<dyn FnMut()>>,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new<F>(wait_ms: u32, action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            wait_ms,
            action: Rc::new(RefCell::new(action)),
            pending: None,
        }
    }

    pub fn call(&mut self) {
        let action = Rc::clone(&self.action);
        // Replacing the previous timeout cancels it.
        self.pending = Some(Timeout::new(self.wait_ms, move || {
            let mut action = action.borrow_mut();
            (*action)();
        }));
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Listens for `event_type`, running `handler` at most once per `limit_ms`.
pub fn throttled_listener<F>(
    target: &EventTarget,
    event_type: &'static str,
    limit_ms: u32,
    mut handler: F,
) -> EventListener
where
    F: FnMut() + 'static,
{
    let mut throttle = Throttle::new(limit_ms);
    EventListener::new(target, event_type, move |_event| {
        if throttle.admit(now_ms()) {
            handler();
        }
    })
}
