//! Element registry.
//!
//! DESIGN
//! ======
//! Every component reaches the document through [`Dom`] instead of global
//! lookups, so the same handlers run against the browser (`web::WebDom`,
//! `hydrate` feature) and against the in-memory [`fake::FakeDom`] in tests.
//!
//! Mutating calls are infallible at this seam. A missing node or a rejected
//! browser call is a no-op for the caller; the browser implementation logs
//! such failures at debug level.

#[cfg(test)]
pub mod fake;

/// Current layout viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub trait Dom {
    /// Handle to an element. Cheap to clone; equality is node identity.
    type Node: Clone + PartialEq + 'static;

    // --- Lookup ---

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;
    /// All connected elements matching a CSS selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    /// Descendants of `scope` matching a CSS selector, in document order.
    fn query_within(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    // --- Tree ---

    fn create_element(&self, tag: &str) -> Option<Self::Node>;
    fn append_child(&self, parent: &Self::Node, child: &Self::Node);
    /// Detach `node` from the document. Detached nodes are left alone.
    fn remove(&self, node: &Self::Node);
    fn is_connected(&self, node: &Self::Node) -> bool;

    // --- Attributes and classes ---

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);
    fn set_class_name(&self, node: &Self::Node, value: &str);

    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    // --- Content ---

    fn text(&self, node: &Self::Node) -> String;
    /// Replace all children with a single text node.
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    // --- Inline style ---

    /// Set one inline style property. Custom properties (`--vh`) are allowed.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    fn style(&self, node: &Self::Node, property: &str) -> Option<String>;

    fn set_styles(&self, node: &Self::Node, declarations: &[(&str, &str)]) {
        for (property, value) in declarations {
            self.set_style(node, property, value);
        }
    }

    // --- Forms ---

    /// Current value of an input, select or textarea; `None` for other nodes.
    fn value(&self, node: &Self::Node) -> Option<String>;
    /// Restore every control of a `<form>` to its default value.
    fn reset_form(&self, form: &Self::Node);

    // --- Geometry ---

    fn scroll_width(&self, node: &Self::Node) -> f64;
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;
    fn viewport(&self) -> Viewport;
    fn scroll_y(&self) -> f64;
    fn location_path(&self) -> String;

    /// True once the window `load` event has fired (`readyState` is
    /// `complete`).
    fn load_complete(&self) -> bool;
}
