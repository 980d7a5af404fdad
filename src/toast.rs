//! Transient notifications ("toasts").
//!
//! DESIGN
//! ======
//! Each [`ToastKind`] is its own channel: showing a toast first removes any
//! toast of the same channel without animation, so a channel never shows two
//! at once. The lifecycle after insertion is driven entirely by scheduled
//! continuations:
//!
//! 1. inserted offscreen (`translateX(400px)`)
//! 2. after the enter delay, slides to `translateX(0)`
//! 3. after the hold (measured from insertion), slides back offscreen
//! 4. after the exit transition has finished, the node is removed
//!
//! Removal never happens before step 3's transition completes. A superseded
//! toast still runs its continuations, but they only touch a detached node.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::rc::Rc;

use crate::config::ToastTimings;
use crate::dom::Dom;
use crate::schedule::Scheduler;
use crate::theme::Theme;

const OFFSCREEN: &str = "translateX(400px)";
const ONSCREEN: &str = "translateX(0)";

const BASE_STYLES: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "100px"),
    ("right", "20px"),
    ("color", "white"),
    ("font-weight", "600"),
    ("z-index", "9999"),
    ("transform", OFFSCREEN),
    ("transition", "transform 0.3s ease"),
];

const THEME_STYLES: &[(&str, &str)] = &[
    ("padding", "1rem 1.5rem"),
    ("border-radius", "var(--border-radius)"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "0.5rem"),
    ("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.2)"),
];

const MESSAGE_STYLES: &[(&str, &str)] = &[("padding", "1rem 2rem"), ("border-radius", "10px")];

/// What a toast reports. Also selects its channel, colors and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    /// Theme change to the carried theme.
    Theme(Theme),
}

impl ToastKind {
    /// Class list for a new toast node.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "message-toast message-success",
            Self::Error => "message-toast message-error",
            Self::Theme(_) => "theme-notification",
        }
    }

    /// Selector matching every live toast on this kind's channel.
    #[must_use]
    pub fn channel_selector(self) -> &'static str {
        match self {
            Self::Success => ".message-success",
            Self::Error => ".message-error",
            Self::Theme(_) => ".theme-notification",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, #4caf50, #8bc34a)",
            Self::Error => "linear-gradient(135deg, #f44336, #ff6b9d)",
            Self::Theme(Theme::Light) => "var(--leaf-green)",
            Self::Theme(Theme::Dark) => "var(--forest-green)",
        }
    }

    fn hold_ms(self, timings: &ToastTimings) -> u32 {
        match self {
            Self::Theme(_) => timings.theme_hold_ms,
            Self::Success | Self::Error => timings.message_hold_ms,
        }
    }
}

pub struct Notifier<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    timings: ToastTimings,
}

impl<D: Dom + 'static> Notifier<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, timings: ToastTimings) -> Self {
        Self { dom, scheduler, timings }
    }

    pub fn success(&self, message: &str) -> Option<D::Node> {
        self.show(message, ToastKind::Success)
    }

    pub fn error(&self, message: &str) -> Option<D::Node> {
        self.show(message, ToastKind::Error)
    }

    /// Show `message` on `kind`'s channel, replacing whatever it showed.
    ///
    /// Returns the inserted node, or `None` when the page has no body.
    pub fn show(&self, message: &str, kind: ToastKind) -> Option<D::Node> {
        for stale in self.dom.query_all(kind.channel_selector()) {
            self.dom.remove(&stale);
        }

        let body = self.dom.body()?;
        let node = self.build(message, kind)?;
        self.dom.append_child(&body, &node);
        self.schedule_lifecycle(&node, kind);
        Some(node)
    }

    fn build(&self, message: &str, kind: ToastKind) -> Option<D::Node> {
        let dom = &self.dom;
        let node = dom.create_element("div")?;
        dom.set_class_name(&node, kind.class_name());
        dom.set_styles(&node, BASE_STYLES);
        dom.set_style(&node, "background", kind.background());

        if let ToastKind::Theme(theme) = kind {
            dom.set_styles(&node, THEME_STYLES);
            if let Some(icon) = dom.create_element("i") {
                dom.set_class_name(&icon, theme.icon_class());
                dom.append_child(&node, &icon);
            }
            if let Some(label) = dom.create_element("span") {
                dom.set_text(&label, message);
                dom.append_child(&node, &label);
            }
        } else {
            dom.set_styles(&node, MESSAGE_STYLES);
            dom.set_text(&node, message);
        }
        Some(node)
    }

    fn schedule_lifecycle(&self, node: &D::Node, kind: ToastKind) {
        let enter_dom = Rc::clone(&self.dom);
        let enter_node = node.clone();
        self.scheduler.after(
            self.timings.enter_delay_ms,
            Box::new(move || enter_dom.set_style(&enter_node, "transform", ONSCREEN)),
        );

        let dom = Rc::clone(&self.dom);
        let scheduler = Rc::clone(&self.scheduler);
        let node = node.clone();
        let exit_ms = self.timings.exit_ms;
        self.scheduler.after(
            kind.hold_ms(&self.timings),
            Box::new(move || {
                dom.set_style(&node, "transform", OFFSCREEN);
                scheduler.after(
                    exit_ms,
                    Box::new(move || {
                        if dom.is_connected(&node) {
                            dom.remove(&node);
                        }
                    }),
                );
            }),
        );
    }
}
