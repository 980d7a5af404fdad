use std::rc::Rc;

use super::*;
use crate::dom::fake::{FakeDom, NodeRef};
use crate::input::Modifiers;
use crate::schedule::ManualScheduler;

struct Map {
    dom: Rc<FakeDom>,
    clock: Rc<ManualScheduler>,
    details: NodeRef,
    inspector: MapInspector<FakeDom>,
}

fn map() -> Map {
    let dom = Rc::new(FakeDom::new());
    let clock = Rc::new(ManualScheduler::new());
    let details = dom.add_to_body("div", &[("id", DETAILS_ID)]);
    dom.set_inner_html(&details, "<p>Select a zone</p>");
    let scheduler: Rc<dyn Scheduler> = clock.clone();
    let inspector = MapInspector::new(Rc::clone(&dom), scheduler, ZoneCatalog::green_haven(), 800);
    Map { dom, clock, details, inspector }
}

#[test]
fn known_zone_renders_details() {
    let m = map();
    assert!(m.inspector.on_zone_click("rose"));

    let html = m.dom.inner_html(m.details);
    assert!(html.starts_with("<h4>Rose Garden</h4>"));
    assert!(html.contains("<li>Heritage Roses</li>"));
    assert!(html.contains("<strong>Hours:</strong> 9:00 AM - 6:00 PM"));
}

#[test]
fn unknown_zone_leaves_details_untouched() {
    let m = map();
    assert!(!m.inspector.on_zone_click("volcano"));
    assert_eq!(m.dom.inner_html(m.details), "<p>Select a zone</p>");
    assert!(!m.dom.has_class(&m.details, "fade-in-up"));
    assert_eq!(m.clock.pending_timers(), 0);
}

#[test]
fn emphasis_is_removed_after_highlight() {
    let m = map();
    m.inspector.on_zone_click("cafe");
    assert!(m.dom.has_class(&m.details, "fade-in-up"));
    m.clock.advance(799);
    assert!(m.dom.has_class(&m.details, "fade-in-up"));
    m.clock.advance(1);
    assert!(!m.dom.has_class(&m.details, "fade-in-up"));
}

#[test]
fn later_click_replaces_earlier_details() {
    let m = map();
    m.inspector.on_zone_click("rose");
    m.inspector.on_zone_click("herb");
    let html = m.dom.inner_html(m.details);
    assert!(html.contains("Herb Garden"));
    assert!(!html.contains("Rose Garden"));
}

#[test]
fn missing_detail_region_is_a_no_op() {
    let dom = Rc::new(FakeDom::new());
    let clock: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
    let inspector = MapInspector::new(Rc::clone(&dom), clock, ZoneCatalog::green_haven(), 800);
    assert!(!inspector.on_zone_click("rose"));
}

#[test]
fn accessibility_labels_zones_in_order() {
    let m = map();
    let first = m.dom.add_to_body("div", &[("class", "garden-zone"), ("data-zone", "entrance")]);
    let second = m.dom.add_to_body("div", &[("class", "garden-zone"), ("data-zone", "rose")]);
    m.inspector.prepare_accessibility();

    assert_eq!(m.dom.attribute(&first, "tabindex").as_deref(), Some("0"));
    assert_eq!(m.dom.attribute(&first, "role").as_deref(), Some("button"));
    assert_eq!(m.dom.attribute(&first, "aria-label").as_deref(), Some("Garden zone 1"));
    assert_eq!(m.dom.attribute(&second, "aria-label").as_deref(), Some("Garden zone 2"));
    assert_eq!(m.dom.attribute(&m.details, "aria-live").as_deref(), Some("polite"));
    assert_eq!(m.dom.attribute(&m.details, "aria-atomic").as_deref(), Some("true"));
}

#[test]
fn activation_keys_open_zone() {
    let m = map();
    let zone = m.dom.add_to_body("div", &[("class", "garden-zone"), ("data-zone", "japanese")]);

    assert!(!m.inspector.on_zone_key(&zone, &KeyPress::new("a", Modifiers::default())));
    assert_eq!(m.dom.inner_html(m.details), "<p>Select a zone</p>");

    assert!(m.inspector.on_zone_key(&zone, &KeyPress::new(" ", Modifiers::default())));
    assert!(m.dom.inner_html(m.details).contains("Japanese Garden"));
}

#[test]
fn hover_scales_zone() {
    let m = map();
    let zone = m.dom.add_to_body("div", &[("class", "garden-zone")]);
    m.inspector.on_zone_hover(&zone, true);
    assert_eq!(m.dom.style(&zone, "transform").as_deref(), Some("scale(1.05)"));
    m.inspector.on_zone_hover(&zone, false);
    assert_eq!(m.dom.style(&zone, "transform").as_deref(), Some("scale(1)"));
}
