//! Event list category filter.
//!
//! Controls carry their category in `data-filter`, list items in
//! `data-category`. The reserved category `all` matches every item.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use std::rc::Rc;

use super::EMPHASIS_CLASS;
use crate::dom::Dom;

pub const CONTROL_SELECTOR: &str = "[data-filter]";
pub const ITEM_SELECTOR: &str = ".event-item";
pub const ALL_CATEGORIES: &str = "all";

const FILTER_ATTRIBUTE: &str = "data-filter";
const CATEGORY_ATTRIBUTE: &str = "data-category";

pub struct EventFilter<D: Dom> {
    dom: Rc<D>,
}

impl<D: Dom> EventFilter<D> {
    #[must_use]
    pub fn new(dom: Rc<D>) -> Self {
        Self { dom }
    }

    /// Handle a click on a filter control. Returns the number of items left
    /// visible, or `None` when the control names no category.
    pub fn on_filter_click(&self, control: &D::Node) -> Option<usize> {
        let category = self.dom.attribute(control, FILTER_ATTRIBUTE)?;
        self.mark_selected(Some(control));
        Some(self.show_category(&category))
    }

    /// Select `category` as if its control had been clicked.
    pub fn select_category(&self, category: &str) -> usize {
        let control = self
            .dom
            .query_all(CONTROL_SELECTOR)
            .into_iter()
            .find(|c| self.dom.attribute(c, FILTER_ATTRIBUTE).as_deref() == Some(category));
        self.mark_selected(control.as_ref());
        self.show_category(category)
    }

    fn mark_selected(&self, selected: Option<&D::Node>) {
        for control in self.dom.query_all(CONTROL_SELECTOR) {
            self.dom.remove_class(&control, "active");
            self.dom.remove_class(&control, "btn-primary");
            self.dom.add_class(&control, "btn-outline-primary");
        }
        if let Some(control) = selected {
            self.dom.add_class(control, "active");
            self.dom.add_class(control, "btn-primary");
            self.dom.remove_class(control, "btn-outline-primary");
        }
    }

    fn show_category(&self, category: &str) -> usize {
        let mut shown = 0;
        for item in self.dom.query_all(ITEM_SELECTOR) {
            let matches = category == ALL_CATEGORIES
                || self.dom.attribute(&item, CATEGORY_ATTRIBUTE).as_deref() == Some(category);
            if matches {
                self.dom.set_style(&item, "display", "block");
                self.dom.add_class(&item, EMPHASIS_CLASS);
                shown += 1;
            } else {
                self.dom.set_style(&item, "display", "none");
            }
        }
        log::debug!("event filter {category:?}: {shown} shown");
        shown
    }
}
