//! Navigation helpers: closing the mobile offcanvas menu and marking the
//! link for the current page.
//!
//! The menu itself is owned by Bootstrap. This module only decides when it
//! should close; the host performs the hide through the library, which may
//! be absent.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::rc::Rc;

use crate::dom::Dom;

pub const OFFCANVAS_SELECTOR: &str = ".offcanvas";
pub const TOGGLER_SELECTOR: &str = ".navbar-toggler";
pub const OFFCANVAS_ID: &str = "navbarOffcanvas";
pub const NAV_LINK_SELECTOR: &str = ".navbar-nav .nav-link";

const HOME_PAGE: &str = "index.html";

pub struct Navigation<D: Dom> {
    dom: Rc<D>,
}

impl<D: Dom> Navigation<D> {
    #[must_use]
    pub fn new(dom: Rc<D>) -> Self {
        Self { dom }
    }

    /// The menu panel, if the page has both a panel and a toggler.
    fn menu(&self) -> Option<(D::Node, D::Node)> {
        let panel = self.dom.query(OFFCANVAS_SELECTOR)?;
        let toggler = self.dom.query(TOGGLER_SELECTOR)?;
        Some((panel, toggler))
    }

    /// A click anywhere on the page. Returns the panel to hide when the click
    /// landed outside both the panel and its toggler.
    #[must_use]
    pub fn on_document_click(&self, target: &D::Node) -> Option<D::Node> {
        let (panel, toggler) = self.menu()?;
        let outside = !self.dom.contains(&panel, target) && !self.dom.contains(&toggler, target);
        outside.then_some(panel)
    }

    /// Escape closes the menu.
    #[must_use]
    pub fn on_escape(&self) -> Option<D::Node> {
        self.menu().map(|(panel, _)| panel)
    }

    /// A click inside `#navbarOffcanvas`. Only a click on the element itself
    /// (its backdrop area, not a link) closes it.
    #[must_use]
    pub fn on_offcanvas_click(&self, target: &D::Node) -> Option<D::Node> {
        let panel = self.dom.by_id(OFFCANVAS_ID)?;
        (panel == *target).then_some(panel)
    }

    /// Add `active` to every nav link pointing at the current page.
    pub fn mark_active_links(&self) -> usize {
        let path = self.dom.location_path();
        let mut marked = 0;
        for link in self.dom.query_all(NAV_LINK_SELECTOR) {
            let Some(href) = self.dom.attribute(&link, "href") else {
                continue;
            };
            if is_current(&path, &href) {
                self.dom.add_class(&link, "active");
                marked += 1;
            }
        }
        marked
    }
}

fn is_current(path: &str, href: &str) -> bool {
    if href == HOME_PAGE {
        return path.ends_with('/');
    }
    !href.is_empty() && path.contains(href)
}
