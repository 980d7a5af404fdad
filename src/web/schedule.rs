//! Timer and animation-frame scheduling in the browser.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use super::describe;
use crate::schedule::{Scheduler, Task};

/// Frame length used when `requestAnimationFrame` is refused.
const FALLBACK_FRAME_MS: u32 = 16;

pub struct BrowserScheduler {
    window: Window,
}

impl BrowserScheduler {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Scheduler for BrowserScheduler {
    fn after(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }

    fn next_frame(&self, task: Task) {
        let slot: Rc<RefCell<Option<Task>>> = Rc::new(RefCell::new(Some(task)));
        let slot_for_cb = Rc::clone(&slot);
        let cb = Closure::once_into_js(move |_ts: f64| {
            let task = slot_for_cb.borrow_mut().take();
            if let Some(task) = task {
                task();
            }
        });

        if let Err(e) = self.window.request_animation_frame(cb.unchecked_ref()) {
            log::debug!("requestAnimationFrame refused: {}", describe(&e));
            let task = slot.borrow_mut().take();
            if let Some(task) = task {
                Timeout::new(FALLBACK_FRAME_MS, task).forget();
            }
        }
    }
}
