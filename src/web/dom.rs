//! `Dom` over the live browser document.
//!
//! Calls the browser rejects are logged at debug level and otherwise
//! ignored, matching the registry contract.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList, Window,
};

use super::describe;
use crate::dom::{Dom, Viewport};
use crate::error::SiteError;

pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

fn report(op: &'static str, err: &JsValue) {
    let err = SiteError::Dom { op, detail: describe(err) };
    log::debug!("{err}");
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Inline style of any styleable element (HTML or SVG).
fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    match Reflect::get(el, &JsValue::from_str("style")) {
        Ok(style) => style.dyn_ref::<CssStyleDeclaration>().cloned(),
        Err(e) => {
            report("style", &e);
            None
        }
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                report("querySelectorAll", &e);
                Vec::new()
            }
        }
    }

    fn query_within(&self, scope: &Element, selector: &str) -> Vec<Element> {
        match scope.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                report("querySelectorAll", &e);
                Vec::new()
            }
        }
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(el) => Some(el),
            Err(e) => {
                report("createElement", &e);
                None
            }
        }
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        if let Err(e) = parent.append_child(child) {
            report("appendChild", &e);
        }
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn is_connected(&self, node: &Element) -> bool {
        node.is_connected()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        if let Err(e) = node.set_attribute(name, value) {
            report("setAttribute", &e);
        }
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            report("classList.add", &e);
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            report("classList.remove", &e);
        }
    }

    fn set_class_name(&self, node: &Element, value: &str) {
        node.set_class_name(value);
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(style) = inline_style(node) else {
            return;
        };
        if let Err(e) = style.set_property(property, value) {
            report("style.setProperty", &e);
        }
    }

    fn style(&self, node: &Element, property: &str) -> Option<String> {
        let style = inline_style(node)?;
        match style.get_property_value(property) {
            Ok(value) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                report("style.getPropertyValue", &e);
                None
            }
        }
    }

    fn value(&self, node: &Element) -> Option<String> {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        node.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_width(&self, node: &Element) -> f64 {
        f64::from(node.scroll_width())
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn viewport(&self) -> Viewport {
        let read = |value: Result<JsValue, JsValue>| match value {
            Ok(v) => v.as_f64().unwrap_or(0.0),
            Err(e) => {
                report("viewport", &e);
                0.0
            }
        };
        Viewport { width: read(self.window.inner_width()), height: read(self.window.inner_height()) }
    }

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(e) => {
                report("scrollY", &e);
                0.0
            }
        }
    }

    fn location_path(&self) -> String {
        match self.window.location().pathname() {
            Ok(path) => path,
            Err(e) => {
                report("location.pathname", &e);
                String::new()
            }
        }
    }

    fn load_complete(&self) -> bool {
        self.document.ready_state() == "complete"
    }
}
