//! Garden map zone inspector.
//!
//! DESIGN
//! ======
//! Zones are plain markup (`.garden-zone[data-zone]`). Clicking one renders
//! its catalog entry into the shared `#zoneDetails` region; there is no
//! selected state, so the last click simply wins. Keys not present in the
//! catalog are ignored and leave the region untouched.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use std::rc::Rc;

use garden::zones::ZoneCatalog;

use super::EMPHASIS_CLASS;
use crate::dom::Dom;
use crate::input::KeyPress;
use crate::schedule::Scheduler;

pub const ZONE_SELECTOR: &str = ".garden-zone";
pub const ZONE_KEY_ATTRIBUTE: &str = "data-zone";
pub const DETAILS_ID: &str = "zoneDetails";

const HOVER_SCALE: &str = "scale(1.05)";
const REST_SCALE: &str = "scale(1)";

pub struct MapInspector<D: Dom> {
    dom: Rc<D>,
    scheduler: Rc<dyn Scheduler>,
    catalog: ZoneCatalog,
    highlight_ms: u32,
}

impl<D: Dom + 'static> MapInspector<D> {
    #[must_use]
    pub fn new(dom: Rc<D>, scheduler: Rc<dyn Scheduler>, catalog: ZoneCatalog, highlight_ms: u32) -> Self {
        Self { dom, scheduler, catalog, highlight_ms }
    }

    #[must_use]
    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// Make every zone keyboard-reachable and announce detail updates.
    pub fn prepare_accessibility(&self) {
        for (index, zone) in self.dom.query_all(ZONE_SELECTOR).iter().enumerate() {
            self.dom.set_attribute(zone, "tabindex", "0");
            self.dom.set_attribute(zone, "role", "button");
            self.dom.set_attribute(zone, "aria-label", &format!("Garden zone {}", index + 1));
        }
        if let Some(details) = self.dom.by_id(DETAILS_ID) {
            self.dom.set_attribute(&details, "aria-live", "polite");
            self.dom.set_attribute(&details, "aria-atomic", "true");
        }
    }

    /// The catalog key carried by a zone element.
    #[must_use]
    pub fn zone_key(&self, zone: &D::Node) -> Option<String> {
        self.dom.attribute(zone, ZONE_KEY_ATTRIBUTE)
    }

    /// Show `key`'s details. Returns whether anything was rendered.
    pub fn on_zone_click(&self, key: &str) -> bool {
        let Some(zone) = self.catalog.get(key) else {
            log::debug!("no zone info for {key:?}");
            return false;
        };
        let Some(details) = self.dom.by_id(DETAILS_ID) else {
            log::debug!("#{DETAILS_ID} missing; zone {key} not shown");
            return false;
        };

        self.dom.set_inner_html(&details, &zone.detail_html());
        self.dom.add_class(&details, EMPHASIS_CLASS);

        let dom = Rc::clone(&self.dom);
        self.scheduler.after(
            self.highlight_ms,
            Box::new(move || dom.remove_class(&details, EMPHASIS_CLASS)),
        );
        true
    }

    /// Enter or Space on a focused zone behaves like a click.
    /// Returns whether the key was consumed.
    pub fn on_zone_key(&self, zone: &D::Node, key: &KeyPress) -> bool {
        if !key.is_activation() {
            return false;
        }
        if let Some(zone_key) = self.zone_key(zone) {
            self.on_zone_click(&zone_key);
        }
        true
    }

    pub fn on_zone_hover(&self, zone: &D::Node, entered: bool) {
        let scale = if entered { HOVER_SCALE } else { REST_SCALE };
        self.dom.set_style(zone, "transform", scale);
    }
}
