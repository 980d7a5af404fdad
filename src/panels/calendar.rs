//! Events calendar for the current month.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use std::rc::Rc;

use chrono::NaiveDate;
use garden::calendar::MonthGrid;

use crate::dom::Dom;

pub const CONTAINER_SELECTOR: &str = ".calendar-days";
pub const DAY_ATTRIBUTE: &str = "data-day";

/// Clickable day cells, for wiring listeners after [`CalendarPanel::render`].
pub const DAY_CELL_SELECTOR: &str = ".calendar-days .calendar-day[data-day]";

pub struct CalendarPanel<D: Dom> {
    dom: Rc<D>,
}

impl<D: Dom> CalendarPanel<D> {
    #[must_use]
    pub fn new(dom: Rc<D>) -> Self {
        Self { dom }
    }

    /// Fill the container with the month containing `today`, replacing any
    /// previous grid. Returns the number of cells emitted.
    pub fn render(&self, today: NaiveDate, activity_days: &[u32]) -> usize {
        let Some(container) = self.dom.query(CONTAINER_SELECTOR) else {
            return 0;
        };
        self.dom.set_inner_html(&container, "");

        let cells = MonthGrid::containing(today).cells(activity_days);
        for cell in &cells {
            let Some(el) = self.dom.create_element("div") else {
                continue;
            };
            self.dom.set_class_name(&el, cell.class_name());
            if let Some(day) = cell.day() {
                let label = day.to_string();
                self.dom.set_text(&el, &label);
                self.dom.set_attribute(&el, DAY_ATTRIBUTE, &label);
            }
            self.dom.append_child(&container, &el);
        }
        cells.len()
    }

    /// Day number carried by a rendered cell.
    #[must_use]
    pub fn day_of(&self, cell: &D::Node) -> Option<u32> {
        match self.dom.attribute(cell, DAY_ATTRIBUTE)?.parse() {
            Ok(day) => Some(day),
            Err(_) => None,
        }
    }

    /// Placeholder for a per-day event listing.
    pub fn on_day_click(&self, day: u32) {
        log::info!("Events for day {day}");
    }
}
