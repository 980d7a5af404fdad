//! Decorative effects: scroll reveal, stat counters, parallax, floating
//! leaves, back-to-top and smooth in-page anchors.
//!
//! DESIGN
//! ======
//! Visibility detection belongs to the host (an `IntersectionObserver` per
//! [`Watch`] kind, configured from [`OBSERVERS`]); this module only reacts
//! once an element is reported visible. Frame-driven work (counters,
//! parallax) is expressed as `Scheduler::next_frame` continuations so tests
//! can step it one frame at a time.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use std::rc::Rc;

use garden::motion::{CounterRun, LeafStyle, parallax_speed, parallax_transform, parse_counter_target};

use crate::dom::Dom;
use crate::panels::EMPHASIS_CLASS;
use crate::schedule::{FrameGate, Scheduler};

pub const REVEAL_SELECTOR: &str = ".glass-card, .benefit-item, .collection-card";
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const PARALLAX_SELECTOR: &str = ".parallax-layer";
pub const LEAF_CONTAINER_SELECTOR: &str = ".floating-leaves";
pub const BACK_TO_TOP_ID: &str = "backToTop";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const TYPING_SELECTOR: &str = ".typing-text";

const LEAF_GLYPH: &str = "\u{1f343}";

// =============================================================================
// VISIBILITY
// =============================================================================

/// Which one-shot visibility watcher reported an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Reveal,
    Counter,
}

/// Observer configuration for one [`Watch`] kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverSpec {
    pub watch: Watch,
    pub selector: &'static str,
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const OBSERVERS: [ObserverSpec; 2] = [
    ObserverSpec { watch: Watch::Reveal, selector: REVEAL_SELECTOR, threshold: 0.1, root_margin: "0px 0px -50px 0px" },
    ObserverSpec { watch: Watch::Counter, selector: COUNTER_SELECTOR, threshold: 0.5, root_margin: "0px" },
];

/// Fade a card in the first time it scrolls into view.
pub fn reveal<D: Dom>(dom: &D, node: &D::Node) {
    dom.add_class(node, EMPHASIS_CLASS);
}

// =============================================================================
// COUNTERS
// =============================================================================

pub struct Counters<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    frames: u32,
}

impl<D: Dom + 'static> Counters<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, frames: u32) -> Self {
        Self { dom, scheduler, frames }
    }

    /// Count `node` up from zero to its `data-target`. The first step is
    /// shown immediately, the rest one per frame. Returns `false` when the
    /// node has no numeric target.
    pub fn start(&self, node: &D::Node) -> bool {
        let Some(target) = parse_counter_target(self.dom.attribute(node, "data-target").as_deref()) else {
            log::debug!("stat counter without numeric data-target");
            return false;
        };
        let plus_suffix = self.dom.text(node).contains('+');
        let run = CounterRun::new(target, self.frames, plus_suffix);
        step_counter(Rc::clone(&self.dom), Rc::clone(&self.scheduler), node.clone(), run);
        true
    }
}

fn step_counter<D: Dom + 'static>(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, node: D::Node, mut run: CounterRun) {
    let frame = run.advance();
    dom.set_text(&node, &frame.text);
    if frame.finished {
        return;
    }
    let next = Rc::clone(&scheduler);
    scheduler.next_frame(Box::new(move || step_counter(dom, next, node, run)));
}

// =============================================================================
// PARALLAX
// =============================================================================

pub struct Parallax<D: Dom> {
    dom: Rc<D>,
    gate: FrameGate,
    default_speed: f64,
}

impl<D: Dom + 'static> Parallax<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, default_speed: f64) -> Self {
        Self { dom, gate: FrameGate::new(scheduler), default_speed }
    }

    /// Queue a layer update for the next frame unless one is already queued.
    pub fn on_scroll(&self) -> bool {
        let dom = Rc::clone(&self.dom);
        let default_speed = self.default_speed;
        self.gate.request(move || shift_layers(&*dom, default_speed))
    }
}

fn shift_layers<D: Dom>(dom: &D, default_speed: f64) {
    let scroll_y = dom.scroll_y();
    for layer in dom.query_all(PARALLAX_SELECTOR) {
        let speed = parallax_speed(dom.attribute(&layer, "data-speed").as_deref(), default_speed);
        dom.set_style(&layer, "transform", &parallax_transform(scroll_y, speed));
    }
}

// =============================================================================
// FLOATING LEAVES
// =============================================================================

/// Add `count` randomly styled leaves to the leaf container. `unit` yields
/// uniform samples in `[0, 1)`. Returns how many were added.
pub fn populate_leaves<D: Dom>(dom: &D, count: u32, mut unit: impl FnMut() -> f64) -> usize {
    let Some(container) = dom.query(LEAF_CONTAINER_SELECTOR) else {
        return 0;
    };
    let mut added = 0;
    for _ in 0..count {
        let Some(leaf) = dom.create_element("div") else {
            break;
        };
        dom.set_class_name(&leaf, "floating-leaf");
        dom.set_text(&leaf, LEAF_GLYPH);
        dom.set_attribute(&leaf, "style", &LeafStyle::sample(&mut unit).css_text());
        dom.append_child(&container, &leaf);
        added += 1;
    }
    added
}

// =============================================================================
// SCROLLING
// =============================================================================

/// Shows `#backToTop` once the page has scrolled past a threshold.
pub struct BackToTop<D: Dom> {
    dom: Rc<D>,
    threshold_px: f64,
}

impl<D: Dom> BackToTop<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, threshold_px: f64) -> Self {
        Self { dom, threshold_px }
    }

    pub fn on_scroll(&self) {
        let Some(button) = self.dom.by_id(BACK_TO_TOP_ID) else {
            return;
        };
        if self.dom.scroll_y() > self.threshold_px {
            self.dom.add_class(&button, "show");
        } else {
            self.dom.remove_class(&button, "show");
        }
    }
}

/// Scroll offset for an in-page anchor: the target's top minus the navbar
/// height. `None` when the link names no element on the page.
pub fn anchor_target<D: Dom>(dom: &D, link: &D::Node) -> Option<f64> {
    let href = dom.attribute(link, "href")?;
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    let target = dom.by_id(id)?;
    let header = dom.query(NAVBAR_SELECTOR).map_or(0.0, |nav| dom.offset_height(&nav));
    Some(dom.offset_top(&target) - header)
}

/// Freeze typing-effect headings in their final state.
pub fn disable_typing<D: Dom>(dom: &D) -> usize {
    let nodes = dom.query_all(TYPING_SELECTOR);
    for node in &nodes {
        dom.set_styles(node, &[("border-right", "none"), ("animation", "none")]);
    }
    nodes.len()
}
