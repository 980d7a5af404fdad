use std::rc::Rc;

use super::*;
use crate::dom::fake::FakeDom;

fn with_container() -> (Rc<FakeDom>, crate::dom::fake::NodeRef, CalendarPanel<FakeDom>) {
    let dom = Rc::new(FakeDom::new());
    let container = dom.add_to_body("div", &[("class", "calendar-days")]);
    let panel = CalendarPanel::new(Rc::clone(&dom));
    (dom, container, panel)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn april_2026_has_three_blanks_then_thirty_days() {
    let (dom, container, panel) = with_container();
    let emitted = panel.render(date(2026, 4, 9), &[15, 18, 22, 25, 28, 30]);
    assert_eq!(emitted, 33);

    let cells = dom.children(container);
    assert_eq!(cells.len(), 33);
    for blank in &cells[..3] {
        assert_eq!(dom.attribute(blank, "class").as_deref(), Some("calendar-day empty"));
        assert_eq!(dom.text(blank), "");
    }
    assert_eq!(dom.text(&cells[3]), "1");
    assert_eq!(dom.text(&cells[32]), "30");

    let marked: Vec<String> = dom.query_all(".has-event").iter().map(|c| dom.text(c)).collect();
    assert_eq!(marked, ["15", "18", "22", "25", "28", "30"]);
}

#[test]
fn render_replaces_previous_grid() {
    let (dom, container, panel) = with_container();
    panel.render(date(2026, 2, 1), &[]);
    panel.render(date(2026, 2, 1), &[]);
    assert_eq!(dom.children(container).len(), 28);
    assert!(dom.query_all(".has-event").is_empty());
}

#[test]
fn day_cells_carry_their_number() {
    let (dom, _container, panel) = with_container();
    panel.render(date(2026, 10, 16), &[]);
    let cells = dom.query_all(DAY_CELL_SELECTOR);
    assert_eq!(cells.len(), 31);
    assert_eq!(panel.day_of(&cells[21]), Some(22));
}

#[test]
fn blank_cells_have_no_day() {
    let (dom, container, panel) = with_container();
    panel.render(date(2026, 10, 1), &[]);
    let first = dom.children(container)[0];
    assert_eq!(panel.day_of(&first), None);
}

#[test]
fn missing_container_renders_nothing() {
    let dom = Rc::new(FakeDom::new());
    let panel = CalendarPanel::new(Rc::clone(&dom));
    assert_eq!(panel.render(date(2026, 10, 16), &[15]), 0);
}
