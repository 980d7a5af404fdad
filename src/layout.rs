//! Viewport guards.
//!
//! Two independent, idempotent passes run at startup and after every resize
//! burst: publishing the `--vh` custom property (1% of the viewport height,
//! for mobile browsers whose `vh` unit includes the collapsing toolbar) and
//! clamping media and containers that overflow the viewport horizontally.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::rc::Rc;

use crate::dom::Dom;
use crate::schedule::{Debouncer, Scheduler};

pub const CLAMP_SELECTOR: &str = "img, video, iframe, .container, .container-fluid";
pub const VH_PROPERTY: &str = "--vh";

pub struct LayoutGuards<D: Dom> {
    dom: Rc<D>,
    debouncer: Debouncer,
}

impl<D: Dom + 'static> LayoutGuards<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, debounce_ms: u32) -> Self {
        Self { dom, debouncer: Debouncer::new(scheduler, debounce_ms) }
    }

    /// Run both guards now. Returns how many elements were clamped.
    pub fn run(&self) -> usize {
        run_guards(&*self.dom)
    }

    /// Schedule a guard pass once resizing has been quiet for the debounce window.
    pub fn on_resize(&self) {
        let dom = Rc::clone(&self.dom);
        self.debouncer.call(move || {
            let clamped = run_guards(&*dom);
            log::debug!("layout guards after resize: {clamped} clamped");
        });
    }
}

fn run_guards<D: Dom>(dom: &D) -> usize {
    publish_viewport_unit(dom);
    clamp_overflow(dom)
}

fn publish_viewport_unit<D: Dom>(dom: &D) {
    let Some(root) = dom.root() else {
        return;
    };
    let unit = dom.viewport().height / 100.0;
    dom.set_style(&root, VH_PROPERTY, &format!("{unit}px"));
}

fn clamp_overflow<D: Dom>(dom: &D) -> usize {
    let width = dom.viewport().width;
    let mut clamped = 0;
    for el in dom.query_all(CLAMP_SELECTOR) {
        if dom.scroll_width(&el) > width {
            dom.set_styles(&el, &[("max-width", "100%"), ("overflow", "hidden")]);
            clamped += 1;
        }
    }
    clamped
}
