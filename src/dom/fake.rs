//! In-memory document for unit tests.
//!
//! Supports the selector subset the site uses: tag, `#id`, `.class`,
//! `[attr]`, `[attr="v"]`, `[attr^="v"]`, compound forms of those, the
//! descendant combinator and comma-separated lists.

#[cfg(test)]
#[path = "fake_test.rs"]
mod fake_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::{Dom, Viewport};

const ROOT: usize = 0;
const BODY: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(usize);

#[derive(Debug, Default)]
struct Element {
    tag: String,
    parent: Option<usize>,
    children: Vec<usize>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    html: String,
    value: Option<String>,
    scroll_width: f64,
    offset_top: f64,
    offset_height: f64,
}

pub struct FakeDom {
    nodes: RefCell<Vec<Element>>,
    viewport: Cell<Viewport>,
    scroll_y: Cell<f64>,
    path: RefCell<String>,
    loaded: Cell<bool>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDom {
    /// An empty `<html><body></body></html>` document, 1024x768 viewport.
    #[must_use]
    pub fn new() -> Self {
        let html = Element { tag: "html".to_owned(), children: vec![BODY], ..Element::default() };
        let body = Element { tag: "body".to_owned(), parent: Some(ROOT), ..Element::default() };
        Self {
            nodes: RefCell::new(vec![html, body]),
            viewport: Cell::new(Viewport { width: 1024.0, height: 768.0 }),
            scroll_y: Cell::new(0.0),
            path: RefCell::new("/".to_owned()),
            loaded: Cell::new(true),
        }
    }

    // --- Builders ---

    #[must_use]
    pub fn body_node(&self) -> NodeRef {
        NodeRef(BODY)
    }

    #[must_use]
    pub fn root_node(&self) -> NodeRef {
        NodeRef(ROOT)
    }

    /// Create an element with attributes and attach it under `parent`.
    pub fn add(&self, parent: NodeRef, tag: &str, attrs: &[(&str, &str)]) -> NodeRef {
        let node = self.detached(tag);
        {
            let mut nodes = self.nodes.borrow_mut();
            for (name, value) in attrs {
                nodes[node.0].attrs.insert((*name).to_owned(), (*value).to_owned());
            }
        }
        self.append_child(&parent, &node);
        node
    }

    pub fn add_to_body(&self, tag: &str, attrs: &[(&str, &str)]) -> NodeRef {
        self.add(self.body_node(), tag, attrs)
    }

    fn detached(&self, tag: &str) -> NodeRef {
        let tag = tag.to_ascii_lowercase();
        let value = matches!(tag.as_str(), "input" | "select" | "textarea").then(String::new);
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Element { tag, value, ..Element::default() });
        NodeRef(nodes.len() - 1)
    }

    pub fn set_value(&self, node: NodeRef, value: &str) {
        self.nodes.borrow_mut()[node.0].value = Some(value.to_owned());
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.viewport.set(Viewport { width, height });
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_path(&self, path: &str) {
        *self.path.borrow_mut() = path.to_owned();
    }

    /// Fresh documents start fully loaded.
    pub fn set_loaded(&self, loaded: bool) {
        self.loaded.set(loaded);
    }

    pub fn set_scroll_width(&self, node: NodeRef, width: f64) {
        self.nodes.borrow_mut()[node.0].scroll_width = width;
    }

    pub fn set_offsets(&self, node: NodeRef, top: f64, height: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[node.0].offset_top = top;
        nodes[node.0].offset_height = height;
    }

    // --- Inspection ---

    #[must_use]
    pub fn inner_html(&self, node: NodeRef) -> String {
        self.nodes.borrow()[node.0].html.clone()
    }

    #[must_use]
    pub fn children(&self, node: NodeRef) -> Vec<NodeRef> {
        self.nodes.borrow()[node.0].children.iter().copied().map(NodeRef).collect()
    }

    #[must_use]
    pub fn tag(&self, node: NodeRef) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    // --- Internals ---

    fn detach(nodes: &mut [Element], idx: usize) {
        if let Some(parent) = nodes[idx].parent.take() {
            nodes[parent].children.retain(|c| *c != idx);
        }
    }

    fn clear_children(nodes: &mut [Element], idx: usize) {
        let children = std::mem::take(&mut nodes[idx].children);
        for child in children {
            nodes[child].parent = None;
        }
    }

    fn preorder(nodes: &[Element], from: usize, out: &mut Vec<usize>) {
        out.push(from);
        for child in &nodes[from].children {
            Self::preorder(nodes, *child, out);
        }
    }

    fn select(&self, scope: usize, include_scope: bool, selector: &str) -> Vec<NodeRef> {
        let groups = parse_selector_list(selector);
        let nodes = self.nodes.borrow();
        let mut order = Vec::new();
        Self::preorder(&nodes, scope, &mut order);
        order
            .into_iter()
            .filter(|idx| include_scope || *idx != scope)
            .filter(|idx| groups.iter().any(|chain| matches_chain(&nodes, *idx, chain)))
            .map(NodeRef)
            .collect()
    }

    fn text_of(nodes: &[Element], idx: usize) -> String {
        let mut out = nodes[idx].text.clone();
        for child in &nodes[idx].children {
            out.push_str(&Self::text_of(nodes, *child));
        }
        out
    }
}

impl Dom for FakeDom {
    type Node = NodeRef;

    fn root(&self) -> Option<NodeRef> {
        Some(NodeRef(ROOT))
    }

    fn body(&self) -> Option<NodeRef> {
        Some(NodeRef(BODY))
    }

    fn by_id(&self, id: &str) -> Option<NodeRef> {
        let nodes = self.nodes.borrow();
        let mut order = Vec::new();
        Self::preorder(&nodes, ROOT, &mut order);
        order
            .into_iter()
            .find(|idx| nodes[*idx].attrs.get("id").is_some_and(|v| v == id))
            .map(NodeRef)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeRef> {
        self.select(ROOT, true, selector)
    }

    fn query_within(&self, scope: &NodeRef, selector: &str) -> Vec<NodeRef> {
        self.select(scope.0, false, selector)
    }

    fn contains(&self, ancestor: &NodeRef, node: &NodeRef) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = Some(node.0);
        while let Some(idx) = cursor {
            if idx == ancestor.0 {
                return true;
            }
            cursor = nodes[idx].parent;
        }
        false
    }

    fn create_element(&self, tag: &str) -> Option<NodeRef> {
        Some(self.detached(tag))
    }

    fn append_child(&self, parent: &NodeRef, child: &NodeRef) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach(&mut nodes, child.0);
        nodes[child.0].parent = Some(parent.0);
        nodes[parent.0].children.push(child.0);
    }

    fn remove(&self, node: &NodeRef) {
        Self::detach(&mut self.nodes.borrow_mut(), node.0);
    }

    fn is_connected(&self, node: &NodeRef) -> bool {
        self.contains(&NodeRef(ROOT), node)
    }

    fn attribute(&self, node: &NodeRef, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeRef, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].attrs.insert(name.to_owned(), value.to_owned());
    }

    fn has_class(&self, node: &NodeRef, class: &str) -> bool {
        self.nodes.borrow()[node.0]
            .attrs
            .get("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn add_class(&self, node: &NodeRef, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let mut nodes = self.nodes.borrow_mut();
        let list = nodes[node.0].attrs.entry("class".to_owned()).or_default();
        if !list.is_empty() {
            list.push(' ');
        }
        list.push_str(class);
    }

    fn remove_class(&self, node: &NodeRef, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(list) = nodes[node.0].attrs.get_mut("class") {
            *list = list.split_whitespace().filter(|c| *c != class).collect::<Vec<_>>().join(" ");
        }
    }

    fn set_class_name(&self, node: &NodeRef, value: &str) {
        self.set_attribute(node, "class", value);
    }

    fn text(&self, node: &NodeRef) -> String {
        Self::text_of(&self.nodes.borrow(), node.0)
    }

    fn set_text(&self, node: &NodeRef, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        Self::clear_children(&mut nodes, node.0);
        nodes[node.0].html.clear();
        text.clone_into(&mut nodes[node.0].text);
    }

    fn set_inner_html(&self, node: &NodeRef, html: &str) {
        let mut nodes = self.nodes.borrow_mut();
        Self::clear_children(&mut nodes, node.0);
        nodes[node.0].text.clear();
        html.clone_into(&mut nodes[node.0].html);
    }

    fn set_style(&self, node: &NodeRef, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].styles.insert(property.to_owned(), value.to_owned());
    }

    fn style(&self, node: &NodeRef, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].styles.get(property).cloned()
    }

    fn value(&self, node: &NodeRef) -> Option<String> {
        self.nodes.borrow()[node.0].value.clone()
    }

    fn reset_form(&self, form: &NodeRef) {
        let mut nodes = self.nodes.borrow_mut();
        let mut order = Vec::new();
        Self::preorder(&nodes, form.0, &mut order);
        for idx in order {
            if let Some(value) = nodes[idx].value.as_mut() {
                value.clear();
            }
        }
    }

    fn scroll_width(&self, node: &NodeRef) -> f64 {
        self.nodes.borrow()[node.0].scroll_width
    }

    fn offset_top(&self, node: &NodeRef) -> f64 {
        self.nodes.borrow()[node.0].offset_top
    }

    fn offset_height(&self, node: &NodeRef) -> f64 {
        self.nodes.borrow()[node.0].offset_height
    }

    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn location_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn load_complete(&self) -> bool {
        self.loaded.get()
    }
}

// =============================================================================
// SELECTORS
// =============================================================================

#[derive(Debug, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

#[derive(Debug)]
enum AttrTest {
    Present(String),
    Equals(String, String),
    Prefix(String, String),
}

fn parse_selector_list(selector: &str) -> Vec<Vec<Compound>> {
    selector
        .split(',')
        .map(|group| group.split_whitespace().map(parse_compound).collect::<Vec<_>>())
        .filter(|chain| !chain.is_empty())
        .collect()
}

fn parse_compound(src: &str) -> Compound {
    let is_marker = |ch: char| matches!(ch, '#' | '.' | '[');
    let mut compound = Compound::default();
    let tag_end = src.find(is_marker).unwrap_or(src.len());
    if tag_end > 0 && &src[..tag_end] != "*" {
        compound.tag = Some(src[..tag_end].to_ascii_lowercase());
    }
    let mut rest = &src[tag_end..];
    while let Some(first) = rest.chars().next() {
        match first {
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(is_marker).unwrap_or(body.len());
                let name = body[..end].to_owned();
                if first == '#' {
                    compound.id = Some(name);
                } else {
                    compound.classes.push(name);
                }
                rest = &body[end..];
            }
            '[' => {
                let end = rest.find(']').unwrap_or(rest.len());
                compound.attrs.push(parse_attr(&rest[1..end]));
                rest = rest.get(end + 1..).unwrap_or("");
            }
            _ => break,
        }
    }
    compound
}

fn parse_attr(inner: &str) -> AttrTest {
    let unquote = |v: &str| v.trim().trim_matches(|c| c == '"' || c == '\'').to_owned();
    if let Some((name, value)) = inner.split_once("^=") {
        AttrTest::Prefix(name.trim().to_owned(), unquote(value))
    } else if let Some((name, value)) = inner.split_once('=') {
        AttrTest::Equals(name.trim().to_owned(), unquote(value))
    } else {
        AttrTest::Present(inner.trim().to_owned())
    }
}

fn matches_compound(el: &Element, compound: &Compound) -> bool {
    if compound.tag.as_ref().is_some_and(|t| *t != el.tag) {
        return false;
    }
    if compound.id.as_ref().is_some_and(|id| el.attrs.get("id") != Some(id)) {
        return false;
    }
    let classes = el.attrs.get("class").map_or("", String::as_str);
    if !compound.classes.iter().all(|c| classes.split_whitespace().any(|have| have == c)) {
        return false;
    }
    compound.attrs.iter().all(|test| match test {
        AttrTest::Present(name) => el.attrs.contains_key(name),
        AttrTest::Equals(name, value) => el.attrs.get(name) == Some(value),
        AttrTest::Prefix(name, value) => el.attrs.get(name).is_some_and(|v| v.starts_with(value.as_str())),
    })
}

fn matches_chain(nodes: &[Element], idx: usize, chain: &[Compound]) -> bool {
    let Some((last, ancestors)) = chain.split_last() else {
        return false;
    };
    if !matches_compound(&nodes[idx], last) {
        return false;
    }
    let mut cursor = nodes[idx].parent;
    for compound in ancestors.iter().rev() {
        loop {
            let Some(current) = cursor else {
                return false;
            };
            cursor = nodes[current].parent;
            if matches_compound(&nodes[current], compound) {
                break;
            }
        }
    }
    true
}
